//! Upload pipeline: file-type validation and storage submission.
//!
//! The HTTP layer extracts the uploaded file from the multipart request
//! and hands it to [`UploadService`], which validates the extension and
//! submits the bytes to storage.

pub mod filetype;

mod error;
mod service;
mod types;

pub use error::UploadError;
pub use service::UploadService;
pub use types::StoredObject;
