//! Core logic for the upload gateway.
//!
//! This crate contains the storage client adapter and the upload pipeline
//! with ZERO web-framework dependencies. The HTTP surface lives in the
//! `uploader-api` crate.
//!
//! # Modules
//!
//! - `storage` - S3-compatible object storage client
//! - `upload` - File-type validation and storage submission

pub mod storage;
pub mod upload;
