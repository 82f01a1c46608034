use std::sync::Arc;

use crate::application::ports::IdGenerator;
use crate::domain::entities::Video;
use crate::domain::errors::Result;
use crate::domain::ports::VideoRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadVideoInput {
    pub title: String,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadVideoOutput {
    pub id: String,
}

/// Registers a new video under a freshly generated id
#[derive(Clone)]
pub struct UploadVideo {
    repository: Arc<dyn VideoRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl UploadVideo {
    pub fn new(repository: Arc<dyn VideoRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    pub async fn execute(&self, input: UploadVideoInput) -> Result<UploadVideoOutput> {
        let id = self.id_generator.new_id();

        let video = Video::new(id.clone(), input.title, input.file_path)?;
        self.repository.create(video).await?;

        tracing::debug!(video_id = %id, "Video registered");

        Ok(UploadVideoOutput { id })
    }
}
