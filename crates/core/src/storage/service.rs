//! Storage service implementation backed by the MinIO SDK.

use bytes::Bytes;
use minio::s3::Client;
use minio::s3::builders::ObjectContent;
use minio::s3::creds::StaticProvider;
use minio::s3::http::BaseUrl;
use minio::s3::types::S3Api;
use tracing::{debug, info};

use super::config::StorageConfig;
use super::error::StorageError;

/// Object storage client bound to a single bucket.
///
/// Holds no per-request mutable state; a single instance is shared across
/// all request handlers.
#[derive(Debug)]
pub struct StorageService {
    client: Client,
    config: StorageConfig,
}

impl StorageService {
    /// Build a client from configuration.
    ///
    /// This constructs the connection handle only; no network traffic
    /// happens until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ClientCreation`] if the endpoint cannot be
    /// parsed or the SDK rejects the parameters.
    pub fn connect(config: StorageConfig) -> Result<Self, StorageError> {
        let mut base_url: BaseUrl = config
            .base_url()
            .parse()
            .map_err(|e| StorageError::client_creation(format!("invalid endpoint: {e}")))?;
        base_url.region = config.region.clone();

        let provider = StaticProvider::new(&config.access_key_id, &config.secret_access_key, None);

        let client = Client::new(base_url, Some(Box::new(provider)), None, None)
            .map_err(|e| StorageError::client_creation(e.to_string()))?;

        debug!(
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            secure = config.secure,
            "storage client created"
        );

        Ok(Self { client, config })
    }

    /// Ensure the configured bucket exists, creating it when absent.
    ///
    /// Idempotent: calling this when the bucket already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::BucketCheck`] if the existence check fails
    /// and [`StorageError::BucketCreate`] if creation fails.
    pub async fn ensure_bucket(&self) -> Result<(), StorageError> {
        let resp = self
            .client
            .bucket_exists(&self.config.bucket)
            .send()
            .await
            .map_err(|e| StorageError::bucket_check(e.to_string()))?;

        if resp.exists {
            debug!(bucket = %self.config.bucket, "bucket already exists");
            return Ok(());
        }

        self.client
            .create_bucket(&self.config.bucket)
            .send()
            .await
            .map_err(|e| StorageError::bucket_create(e.to_string()))?;

        info!(
            bucket = %self.config.bucket,
            region = %self.config.region,
            "bucket created"
        );

        Ok(())
    }

    /// Upload `data` under `key` with the given content type.
    ///
    /// The byte length is known up front; the put is a single shot with no
    /// retry. A key that already exists is silently overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] on backend failure.
    pub async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = data.len();

        self.client
            .put_object_content(&self.config.bucket, key, ObjectContent::from(data))
            .content_type(content_type.to_string())
            .send()
            .await
            .map_err(|e| StorageError::write(e.to_string()))?;

        debug!(
            bucket = %self.config.bucket,
            key = %key,
            size,
            content_type = %content_type,
            "object stored"
        );

        Ok(())
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Get the region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.config.region
    }
}
