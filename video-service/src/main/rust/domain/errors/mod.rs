use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid id")]
    InvalidId,

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid file path")]
    InvalidFilePath,

    #[error("video not found")]
    VideoNotFound,

    #[error("repository failure: {0}")]
    Repository(String),

    #[error("upload failed: {0}")]
    Upload(String),
}

impl DomainError {
    /// Caller-fixable input errors raised by entity validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidId | Self::InvalidTitle | Self::InvalidFilePath
        )
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
