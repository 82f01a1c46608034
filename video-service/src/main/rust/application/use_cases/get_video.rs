use std::sync::Arc;

use crate::domain::entities::Video;
use crate::domain::errors::Result;
use crate::domain::ports::VideoRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVideoInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVideoOutput {
    pub video: Video,
}

/// Looks a video up by id
#[derive(Clone)]
pub struct GetVideo {
    repository: Arc<dyn VideoRepository>,
}

impl GetVideo {
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: GetVideoInput) -> Result<GetVideoOutput> {
        let video = self.repository.find_by_id(&input.id).await?;
        Ok(GetVideoOutput { video })
    }
}
