//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use trademedia_core::Config;
use trademedia_storage::create_storage;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    // Validate configuration - fail fast on misconfiguration, except for the
    // write credential which is checked per request
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated");

    // Setup storage
    let storage = create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;

    let state = Arc::new(AppState::new(config, storage));

    // Setup routes
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
