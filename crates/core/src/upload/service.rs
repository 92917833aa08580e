//! Upload service implementation.

use std::sync::Arc;

use bytes::Bytes;

use super::error::UploadError;
use super::filetype;
use super::types::StoredObject;
use crate::storage::StorageService;

/// Validates an uploaded file and submits it to storage.
pub struct UploadService {
    storage: Arc<StorageService>,
}

impl UploadService {
    /// Create a new upload service.
    #[must_use]
    pub fn new(storage: Arc<StorageService>) -> Self {
        Self { storage }
    }

    /// Validate `filename` and store `data` under it.
    ///
    /// The object key is the filename exactly as supplied: no sanitization
    /// and no collision handling, so a later upload with the same name
    /// overwrites the earlier object.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedFileType`] when the extension is
    /// not allowed and [`UploadError::Storage`] when the put fails.
    pub async fn store(&self, filename: &str, data: Bytes) -> Result<StoredObject, UploadError> {
        let extension = filetype::extension_of(filename);
        let content_type = filetype::validate(&extension)?;

        let file_size = data.len() as u64;
        self.storage.put_object(filename, data, content_type).await?;

        Ok(StoredObject {
            file_name: filename.to_string(),
            file_size,
            file_type: content_type.to_string(),
            object_key: filename.to_string(),
        })
    }

    /// Bucket the service writes to.
    #[must_use]
    pub fn bucket(&self) -> &str {
        self.storage.bucket()
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{StorageConfig, StorageService};

    use super::*;

    fn service() -> UploadService {
        let config = StorageConfig::new("localhost:9000", "minioadmin", "minioadmin", false);
        let storage = StorageService::connect(config).expect("client");
        UploadService::new(Arc::new(storage))
    }

    #[tokio::test]
    async fn test_rejects_disallowed_extension_before_storage() {
        // localhost:9000 is not reachable in unit tests; a validation
        // failure must short-circuit before any network call.
        let err = service()
            .store("photo.gif", Bytes::from_static(b"GIF89a"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFileType { .. }));
    }

    #[tokio::test]
    async fn test_rejects_missing_extension() {
        let err = service()
            .store("noext", Bytes::from_static(b"data"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFileType { .. }));
    }
}
