use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use video_service::{
    routes, DomainError, GetVideo, IdGenerator, InMemoryVideoRepository, Result, UploadVideo,
    UuidGenerator, Video, VideoHandler, VideoRepository,
};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

struct FixedIdGenerator;

impl IdGenerator for FixedIdGenerator {
    fn new_id(&self) -> String {
        "v1".to_string()
    }
}

struct BrokenRepository;

#[async_trait]
impl VideoRepository for BrokenRepository {
    async fn create(&self, _video: Video) -> Result<()> {
        Err(DomainError::Repository("connection refused: 10.0.0.7".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Video> {
        Err(DomainError::Repository("connection refused: 10.0.0.7".to_string()))
    }
}

fn api_with(
    repository: Arc<dyn VideoRepository>,
    id_generator: Arc<dyn IdGenerator>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let upload_video = UploadVideo::new(repository.clone(), id_generator);
    let get_video = GetVideo::new(repository);
    routes(VideoHandler::new(upload_video, get_video))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is JSON")
}

#[tokio::test]
async fn test_upload_then_get_round_trip() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    let created = warp::test::request()
        .method("POST")
        .path("/videos")
        .header("content-type", "application/json")
        .body(r#"{"title":"t","file_path":"/tmp/a.mp4"}"#)
        .reply(&api)
        .await;

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(body_json(created.body()), json!({ "id": "v1" }));

    let fetched = warp::test::request()
        .method("GET")
        .path("/videos/v1")
        .reply(&api)
        .await;

    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched.body()),
        json!({
            "id": "v1",
            "title": "t",
            "file_path": "/tmp/a.mp4",
            "status": "pending"
        })
    );
}

#[tokio::test]
async fn test_generated_ids_are_distinct_per_upload() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(UuidGenerator),
    );

    let mut ids = Vec::new();
    for _ in 0..2 {
        let created = warp::test::request()
            .method("POST")
            .path("/videos")
            .body(r#"{"title":"same","file_path":"/tmp/same.mp4"}"#)
            .reply(&api)
            .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        ids.push(body_json(created.body())["id"].as_str().unwrap().to_string());
    }
    assert_ne!(ids[0], ids[1]);

    for id in &ids {
        let fetched = warp::test::request()
            .method("GET")
            .path(&format!("/videos/{}", id))
            .reply(&api)
            .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(body_json(fetched.body())["title"], "same");
    }
}

#[tokio::test]
async fn test_health() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    let response = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body().as_ref(), b"ok");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let repository = Arc::new(InMemoryVideoRepository::new());
    let api = api_with(repository.clone(), Arc::new(FixedIdGenerator));

    let response = warp::test::request()
        .method("POST")
        .path("/videos")
        .body(r#"{"title": "t", "file_path": "#)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body().as_ref(), b"invalid json");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_blank_title_is_bad_request_and_not_stored() {
    let repository = Arc::new(InMemoryVideoRepository::new());
    let api = api_with(repository.clone(), Arc::new(FixedIdGenerator));

    let response = warp::test::request()
        .method("POST")
        .path("/videos")
        .body(r#"{"title":"   ","file_path":"/tmp/a.mp4"}"#)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body().as_ref(), b"invalid title");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_missing_file_path_is_bad_request() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    let response = warp::test::request()
        .method("POST")
        .path("/videos")
        .body(r#"{"title":"t"}"#)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body().as_ref(), b"invalid file path");
}

#[tokio::test]
async fn test_unknown_video_is_not_found() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    let response = warp::test::request()
        .method("GET")
        .path("/videos/does-not-exist")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body().as_ref(), b"video not found");
}

#[tokio::test]
async fn test_repository_failure_is_opaque_internal_error() {
    let api = api_with(Arc::new(BrokenRepository), Arc::new(FixedIdGenerator));

    let created = warp::test::request()
        .method("POST")
        .path("/videos")
        .body(r#"{"title":"t","file_path":"/tmp/a.mp4"}"#)
        .reply(&api)
        .await;
    assert_eq!(created.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(created.body().as_ref(), b"internal server error");

    let fetched = warp::test::request()
        .method("GET")
        .path("/videos/v1")
        .reply(&api)
        .await;
    assert_eq!(fetched.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fetched.body().as_ref(), b"internal server error");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let _ = video_service::HttpMetrics::init();
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&api)
        .await;

    let response = warp::test::request()
        .method("GET")
        .path("/metrics")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}

#[tokio::test]
async fn test_trailing_data_after_body_is_ignored() {
    let api = api_with(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(FixedIdGenerator),
    );

    let response = warp::test::request()
        .method("POST")
        .path("/videos")
        .body(r#"{"title":"t","file_path":"/a"} trailing"#)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response.body()), json!({ "id": "v1" }));
}

#[tokio::test]
async fn test_null_body_fails_title_validation() {
    let repository = Arc::new(InMemoryVideoRepository::new());
    let api = api_with(repository.clone(), Arc::new(FixedIdGenerator));

    let response = warp::test::request()
        .method("POST")
        .path("/videos")
        .body("null")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body().as_ref(), b"invalid title");
    assert!(repository.is_empty().await);
}
