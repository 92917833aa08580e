//! File upload endpoint.
//!
//! Accepts a single multipart `file` field, validates its extension and
//! forwards the bytes to object storage. Every outcome, success or
//! failure, is reported with the same JSON schema.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::AppState;
use uploader_core::upload::{StoredObject, UploadError};

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload))
}

/// Upload response body, shared by success and failure paths.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Whether the upload was stored.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Original filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Stored size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Content type the object was stored with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Key the object was stored under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<String>,
}

impl UploadResponse {
    fn stored(object: StoredObject) -> Self {
        Self {
            success: true,
            message: "file uploaded successfully".to_string(),
            file_name: Some(object.file_name),
            file_size: Some(object.file_size),
            file_type: Some(object.file_type),
            object_key: Some(object.object_key),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            file_name: None,
            file_size: None,
            file_type: None,
            object_key: None,
        }
    }
}

/// POST `/upload`
///
/// Single pass: parse the multipart body, pull out the `file` field, then
/// hand filename and bytes to the upload service.
async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            return error_response(&UploadError::malformed(rejection.body_text()));
        }
    };

    let (filename, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return error_response(&UploadError::missing_file("request has no 'file' field"));
            }
            Err(err) => return error_response(&UploadError::malformed(err.to_string())),
        };

        if field.name() != Some("file") {
            continue;
        }

        let Some(filename) = field.file_name().map(ToOwned::to_owned) else {
            return error_response(&UploadError::missing_file("file field has no filename"));
        };

        match field.bytes().await {
            Ok(data) => break (filename, data),
            Err(err) => return error_response(&UploadError::malformed(err.to_string())),
        }
    };

    match state.uploads.store(&filename, data).await {
        Ok(stored) => {
            info!(
                file = %stored.file_name,
                content_type = %stored.file_type,
                size = stored.file_size,
                "file uploaded"
            );
            (StatusCode::OK, Json(UploadResponse::stored(stored))).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// Fallback for known paths hit with the wrong method.
pub async fn method_not_allowed() -> Response {
    error_response(&UploadError::MethodNotAllowed)
}

fn status_for(error: &UploadError) -> StatusCode {
    match error {
        UploadError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        UploadError::MalformedRequest(_)
        | UploadError::MissingFile(_)
        | UploadError::UnsupportedFileType { .. } => StatusCode::BAD_REQUEST,
        UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &UploadError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        error!(error = %error, "upload failed");
    } else {
        warn!(error = %error, "upload rejected");
    }
    (status, Json(UploadResponse::failure(error.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uploader_core::storage::StorageError;

    use super::*;

    #[test]
    fn test_success_body_shape() {
        let response = UploadResponse::stored(StoredObject {
            file_name: "report.txt".to_string(),
            file_size: 10,
            file_type: "text/plain".to_string(),
            object_key: "report.txt".to_string(),
        });

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "file uploaded successfully",
                "fileName": "report.txt",
                "fileSize": 10,
                "fileType": "text/plain",
                "objectKey": "report.txt"
            })
        );
    }

    #[test]
    fn test_failure_body_omits_file_fields() {
        let response = UploadResponse::failure("nope".to_string());
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value, json!({"success": false, "message": "nope"}));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&UploadError::MethodNotAllowed),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            status_for(&UploadError::malformed("bad body")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&UploadError::missing_file("absent")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&UploadError::unsupported_file_type(".gif")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&UploadError::Storage(StorageError::write("down"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
