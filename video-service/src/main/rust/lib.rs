pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenience
pub use application::ports::{ByteStream, IdGenerator, Uploader};
pub use application::use_cases::{
    GetVideo, GetVideoInput, GetVideoOutput, UploadVideo, UploadVideoInput, UploadVideoOutput,
};
pub use config::Config;
pub use domain::entities::Video;
pub use domain::errors::{DomainError, Result};
pub use domain::ports::VideoRepository;
pub use domain::value_objects::VideoStatus;
pub use infrastructure::http::{routes, HttpMetrics, VideoHandler};
pub use infrastructure::id::UuidGenerator;
pub use infrastructure::repository::InMemoryVideoRepository;
pub use infrastructure::storage::ObjectStoreUploader;
