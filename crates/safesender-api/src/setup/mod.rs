//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use safesender_core::{Config, UuidTokenGenerator};
use safesender_db::PgFileRecordRepository;
use safesender_services::FilesService;
use safesender_storage::create_blob_store;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.environment());

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let blobs = create_blob_store(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize blob store: {}", e))?;
    tracing::info!(backend = %blobs.backend_type(), "Blob store initialized");

    let files = FilesService::new(
        Arc::new(PgFileRecordRepository::new(pool)),
        blobs,
        Arc::new(UuidTokenGenerator),
        Arc::new(config.clone()),
    );

    let state = Arc::new(AppState::new(
        config.clone(),
        files,
        CancellationToken::new(),
    ));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
