use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::metrics::HttpMetrics;
use super::video_handler::VideoHandler;

/// Build the service's warp filter tree
pub fn routes(
    handler: VideoHandler,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let handler = Arc::new(handler);

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            HttpMetrics::record_request("health", StatusCode::OK);
            warp::reply::with_status("ok", StatusCode::OK)
        });

    let upload_route = warp::path("videos")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_handler(handler.clone()))
        .and_then(|body: Bytes, handler: Arc<VideoHandler>| async move {
            Ok::<_, Infallible>(handler.upload_video(body).await)
        });

    let get_route = warp::path!("videos" / String)
        .and(warp::get())
        .and(with_handler(handler))
        .and_then(|id: String, handler: Arc<VideoHandler>| async move {
            Ok::<_, Infallible>(handler.get_video(id).await)
        });

    let metrics_route = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::with_header(
                HttpMetrics::gather(),
                "content-type",
                "text/plain; version=0.0.4; charset=utf-8",
            )
        });

    let access_log = warp::log::custom(|info| {
        tracing::info!(
            method = %info.method(),
            path = info.path(),
            status = info.status().as_u16(),
            elapsed_ms = info.elapsed().as_secs_f64() * 1000.0,
            "HTTP request"
        );
    });

    health_route
        .or(upload_route)
        .or(get_route)
        .or(metrics_route)
        .with(access_log)
}

fn with_handler(
    handler: Arc<VideoHandler>,
) -> impl Filter<Extract = (Arc<VideoHandler>,), Error = Infallible> + Clone {
    warp::any().map(move || handler.clone())
}
