use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::domain::errors::Result;

/// Body of an object handed to an uploader
pub type ByteStream = Pin<Box<dyn AsyncRead + Send>>;

/// Port for pushing objects to remote blob storage
///
/// Implementations own their retry policy, if any.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn put_object(&self, key: &str, body: ByteStream) -> Result<()>;
}
