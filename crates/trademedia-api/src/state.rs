//! Application state.
//!
//! The storage backend and configuration are injected at construction so
//! handlers stay stateless and tests can swap in fake backends.

use std::sync::Arc;

use trademedia_core::Config;
use trademedia_storage::Storage;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Storage write credential, if one is configured. Its presence is
    /// checked per request rather than at startup.
    pub fn write_token(&self) -> Option<&str> {
        self.config.write_token()
    }
}
