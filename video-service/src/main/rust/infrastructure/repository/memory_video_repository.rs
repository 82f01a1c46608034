use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Video;
use crate::domain::errors::{DomainError, Result};
use crate::domain::ports::VideoRepository;

/// Video repository backed by a map behind a single reader/writer lock
///
/// `create` overwrites any entry with the same id; uniqueness comes from
/// the id generator.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<HashMap<String, Video>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: Video) -> Result<()> {
        let mut videos = self.videos.write().await;
        videos.insert(video.id().to_string(), video);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Video> {
        let videos = self.videos.read().await;
        videos.get(id).cloned().ok_or(DomainError::VideoNotFound)
    }
}
