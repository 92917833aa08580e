//! S3 upload gateway server.
//!
//! Main entry point: loads configuration, builds the storage client,
//! ensures the bucket exists and serves the HTTP API.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uploader_api::{AppState, create_router};
use uploader_core::storage::{StorageConfig, StorageService};
use uploader_core::upload::{UploadService, filetype::ALLOWED_EXTENSIONS};
use uploader_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "uploader_server=debug,uploader_api=debug,uploader_core=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Create storage client and make sure the bucket is there. Both are
    // fatal: without storage there is nothing to serve.
    let storage = StorageService::connect(StorageConfig::from(&config.s3))
        .context("failed to create storage client")?;
    storage
        .ensure_bucket()
        .await
        .context("failed to ensure bucket exists")?;
    info!(bucket = storage.bucket(), region = storage.region(), "bucket ready");

    // Create application state
    let state = AppState {
        uploads: Arc::new(UploadService::new(Arc::new(storage))),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("server listening on {addr}");
    info!("upload endpoint: http://{addr}/upload");
    info!(allowed = ?ALLOWED_EXTENSIONS, "accepting uploads");

    axum::serve(listener, app).await?;

    Ok(())
}
