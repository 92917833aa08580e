//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod upload;

/// Creates the API router with all routes.
///
/// Requests that hit a known path with the wrong method get a JSON 405
/// instead of axum's empty default.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(upload::routes())
        .method_not_allowed_fallback(upload::method_not_allowed)
}
