mod errors;
mod metrics;
mod router;
mod video_handler;

pub use errors::{error_response, status_for};
pub use metrics::HttpMetrics;
pub use router::routes;
pub use video_handler::VideoHandler;
