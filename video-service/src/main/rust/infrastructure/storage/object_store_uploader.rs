use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{ObjectStore, ObjectStoreExt, PutPayload};
use tokio::io::AsyncReadExt;

use crate::application::ports::{ByteStream, Uploader};
use crate::domain::errors::{DomainError, Result};

/// Uploader passing objects straight through to an `ObjectStore`
#[derive(Clone)]
pub struct ObjectStoreUploader {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreUploader {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// S3 bucket configured from the standard `AWS_*` environment
    pub fn s3(bucket: &str) -> Result<Self> {
        Self::from_s3_builder(AmazonS3Builder::from_env(), bucket)
    }

    pub fn from_s3_builder(builder: AmazonS3Builder, bucket: &str) -> Result<Self> {
        let store = builder
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| DomainError::Upload(e.to_string()))?;

        Ok(Self::new(Arc::new(store)))
    }
}

#[async_trait]
impl Uploader for ObjectStoreUploader {
    async fn put_object(&self, key: &str, mut body: ByteStream) -> Result<()> {
        if key.trim().is_empty() {
            return Err(DomainError::Upload("object key cannot be empty".to_string()));
        }

        let mut buffer = Vec::new();
        body.read_to_end(&mut buffer)
            .await
            .map_err(|e| DomainError::Upload(e.to_string()))?;

        let size = buffer.len();
        let location = Path::from(key);
        let start = Instant::now();

        self.store
            .put(&location, PutPayload::from(Bytes::from(buffer)))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %key, size_bytes = size, "Object upload failed");
                DomainError::Upload(e.to_string())
            })?;

        tracing::info!(
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object uploaded"
        );

        Ok(())
    }
}
