//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
///
/// `ClientCreation`, `BucketCheck` and `BucketCreate` only occur at startup
/// and are fatal there; `Write` surfaces per-request as an internal error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage client could not be constructed.
    #[error("failed to create storage client: {0}")]
    ClientCreation(String),

    /// The bucket existence check failed.
    #[error("failed to check bucket existence: {0}")]
    BucketCheck(String),

    /// The bucket could not be created.
    #[error("failed to create bucket: {0}")]
    BucketCreate(String),

    /// An object put failed.
    #[error("failed to write object to storage: {0}")]
    Write(String),
}

impl StorageError {
    /// Create a client creation error.
    #[must_use]
    pub fn client_creation(msg: impl Into<String>) -> Self {
        Self::ClientCreation(msg.into())
    }

    /// Create a bucket check error.
    #[must_use]
    pub fn bucket_check(msg: impl Into<String>) -> Self {
        Self::BucketCheck(msg.into())
    }

    /// Create a bucket creation error.
    #[must_use]
    pub fn bucket_create(msg: impl Into<String>) -> Self {
        Self::BucketCreate(msg.into())
    }

    /// Create an object write error.
    #[must_use]
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}
