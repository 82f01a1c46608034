use crate::domain::errors::{DomainError, Result};
use crate::domain::value_objects::VideoStatus;

/// A video registered for processing (aggregate root of the media context)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: String,
    title: String,
    file_path: String,
    status: VideoStatus,
    error_message: Option<String>,
}

impl Video {
    /// Build a pending video, rejecting blank fields in id, title, file path order
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Result<Self> {
        let video = Self {
            id: id.into(),
            title: title.into(),
            file_path: file_path.into(),
            status: VideoStatus::Pending,
            error_message: None,
        };
        video.validate()?;
        Ok(video)
    }

    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.id) {
            return Err(DomainError::InvalidId);
        }
        if is_blank(&self.title) {
            return Err(DomainError::InvalidTitle);
        }
        if is_blank(&self.file_path) {
            return Err(DomainError::InvalidFilePath);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn status(&self) -> VideoStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn can_be_processed(&self) -> bool {
        self.status.is_processable()
    }

    /// Overwrite the processing status; the processing pipeline owns transitions
    pub fn set_status(&mut self, status: VideoStatus) {
        self.status = status;
    }

    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
