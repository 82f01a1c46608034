use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use warp::http::StatusCode;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref HTTP_REQUESTS: IntCounterVec = IntCounterVec::new(
        Opts::new("http_requests_total", "HTTP requests handled, by route and status"),
        &["route", "status"]
    )
    .expect("metric can be created");
    pub static ref VIDEOS_UPLOADED: IntCounter = IntCounter::new(
        "videos_uploaded_total",
        "Videos registered through the API"
    )
    .expect("metric can be created");
}

pub struct HttpMetrics;

impl HttpMetrics {
    /// Register collectors; fails if called twice
    pub fn init() -> Result<(), prometheus::Error> {
        REGISTRY.register(Box::new(HTTP_REQUESTS.clone()))?;
        REGISTRY.register(Box::new(VIDEOS_UPLOADED.clone()))?;
        #[cfg(target_os = "linux")]
        REGISTRY.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;
        Ok(())
    }

    pub fn record_request(route: &str, status: StatusCode) {
        HTTP_REQUESTS
            .with_label_values(&[route, status.as_str()])
            .inc();
    }

    pub fn record_upload() {
        VIDEOS_UPLOADED.inc();
    }

    pub fn gather() -> Vec<u8> {
        let encoder = TextEncoder::new();
        let metric_families = REGISTRY.gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!("Failed to encode metrics: {}", e);
            return b"# Error encoding metrics\n".to_vec();
        }
        buffer
    }
}
