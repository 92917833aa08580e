//! Upload pipeline error types.

use thiserror::Error;

use super::filetype::ALLOWED_EXTENSIONS;
use crate::storage::StorageError;

/// Upload pipeline errors.
///
/// Everything except `Storage` is a client input error; `Storage` is a
/// backend failure.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Request used a method other than POST.
    #[error("only POST requests are allowed")]
    MethodNotAllowed,

    /// The multipart body could not be parsed or exceeded the size cap.
    #[error("malformed upload request: {0}")]
    MalformedRequest(String),

    /// The `file` field was absent or unusable.
    #[error("missing file field: {0}")]
    MissingFile(String),

    /// The filename extension is not in the allowed table.
    #[error("unsupported file type '{extension}'; allowed extensions: {allowed}")]
    UnsupportedFileType {
        /// The rejected extension.
        extension: String,
        /// The fixed list of allowed extensions.
        allowed: String,
    },

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl UploadError {
    /// Create a malformed request error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRequest(msg.into())
    }

    /// Create a missing file error.
    #[must_use]
    pub fn missing_file(msg: impl Into<String>) -> Self {
        Self::MissingFile(msg.into())
    }

    /// Create an unsupported file type error carrying the allowed list.
    #[must_use]
    pub fn unsupported_file_type(extension: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            extension: extension.into(),
            allowed: ALLOWED_EXTENSIONS.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_allowed_list() {
        let err = UploadError::unsupported_file_type(".gif");
        let msg = err.to_string();
        assert!(msg.contains(".gif"));
        assert!(msg.contains(".txt"));
        assert!(msg.contains(".png"));
        assert!(msg.contains(".json"));
    }

    #[test]
    fn test_storage_error_wraps() {
        let err = UploadError::from(StorageError::write("connection refused"));
        assert!(matches!(err, UploadError::Storage(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
