use bytes::Bytes;
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use super::errors::error_response;
use super::metrics::HttpMetrics;
use crate::application::use_cases::{GetVideo, GetVideoInput, UploadVideo, UploadVideoInput};
use crate::domain::entities::Video;

#[derive(Debug, Default, Deserialize)]
struct UploadVideoRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    file_path: String,
}

#[derive(Debug, Serialize)]
struct UploadVideoResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct VideoResponse<'a> {
    id: &'a str,
    title: &'a str,
    file_path: &'a str,
    status: &'static str,
}

impl<'a> From<&'a Video> for VideoResponse<'a> {
    fn from(video: &'a Video) -> Self {
        Self {
            id: video.id(),
            title: video.title(),
            file_path: video.file_path(),
            status: video.status().as_str(),
        }
    }
}

/// Decode the first JSON value of the body; anything after it is ignored and
/// a bare `null` reads as an empty request
fn decode_upload_request(body: &[u8]) -> serde_json::Result<UploadVideoRequest> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<UploadVideoRequest>>();
    match values.next() {
        Some(request) => Ok(request?.unwrap_or_default()),
        None => Err(serde::de::Error::custom("empty body")),
    }
}

/// HTTP entry points for the video use cases
#[derive(Clone)]
pub struct VideoHandler {
    upload_video: UploadVideo,
    get_video: GetVideo,
}

impl VideoHandler {
    pub fn new(upload_video: UploadVideo, get_video: GetVideo) -> Self {
        Self {
            upload_video,
            get_video,
        }
    }

    /// POST /videos
    pub async fn upload_video(&self, body: Bytes) -> Response {
        let response = match decode_upload_request(&body) {
            Err(e) => {
                tracing::debug!(error = %e, "Rejected upload body");
                warp::reply::with_status("invalid json", StatusCode::BAD_REQUEST).into_response()
            }
            Ok(request) => {
                let input = UploadVideoInput {
                    title: request.title,
                    file_path: request.file_path,
                };
                match self.upload_video.execute(input).await {
                    Ok(output) => {
                        HttpMetrics::record_upload();
                        tracing::info!(video_id = %output.id, "Video uploaded");
                        warp::reply::with_status(
                            warp::reply::json(&UploadVideoResponse { id: output.id }),
                            StatusCode::CREATED,
                        )
                        .into_response()
                    }
                    Err(e) => error_response(&e),
                }
            }
        };

        HttpMetrics::record_request("upload_video", response.status());
        response
    }

    /// GET /videos/{id}
    pub async fn get_video(&self, id: String) -> Response {
        let response = match self.get_video.execute(GetVideoInput { id }).await {
            Ok(output) => warp::reply::json(&VideoResponse::from(&output.video)).into_response(),
            Err(e) => error_response(&e),
        };

        HttpMetrics::record_request("get_video", response.status());
        response
    }
}
