//! Storage configuration types.

use uploader_shared::S3Settings;

/// Storage client configuration.
///
/// Objects live in a single bucket in a single region; both are fixed
/// constants unless overridden with the builder methods.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Endpoint, host and port without a scheme.
    pub endpoint: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Whether to reach the endpoint over TLS.
    pub secure: bool,
    /// Bucket all objects are written to.
    pub bucket: String,
    /// Region used when the bucket is created.
    pub region: String,
}

impl StorageConfig {
    /// Default bucket name.
    pub const DEFAULT_BUCKET: &'static str = "my-bucket";
    /// Default region.
    pub const DEFAULT_REGION: &'static str = "us-east-1";

    /// Create a new storage config with the default bucket and region.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        secure: bool,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            secure,
            bucket: Self::DEFAULT_BUCKET.to_string(),
            region: Self::DEFAULT_REGION.to_string(),
        }
    }

    /// Set the bucket name.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Full endpoint URL, scheme chosen by the TLS flag.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}", self.endpoint)
    }
}

impl From<&S3Settings> for StorageConfig {
    fn from(settings: &S3Settings) -> Self {
        Self::new(
            settings.endpoint.clone(),
            settings.access_key.clone(),
            settings.secret_key.clone(),
            settings.use_ssl,
        )
    }
}
