//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The `/upload` and `/health` routes
//! - Application state shared across handlers
//! - Router construction with tracing, CORS and body-limit layers

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uploader_core::upload::UploadService;

/// Maximum accepted request body size: 32 MiB.
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upload pipeline service.
    pub uploads: Arc<UploadService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
