use async_trait::async_trait;

use crate::domain::entities::Video;
use crate::domain::errors::Result;

/// Port for persisting the Video aggregate
///
/// `find_by_id` fails with `DomainError::VideoNotFound` for unknown ids.
/// Returned videos are owned copies; mutating them never touches the store.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: Video) -> Result<()>;

    async fn find_by_id(&self, id: &str) -> Result<Video>;
}
