//! Shared configuration for the upload gateway.
//!
//! This crate provides the environment-backed configuration used by the
//! server binary and the core storage layer.

pub mod config;

pub use config::{AppConfig, S3Settings, ServerConfig};
