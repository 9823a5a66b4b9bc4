//! Application state shared across all request handlers.

use std::sync::Arc;

use bitacora_store::BlogStore;

use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only handle to the content store.
    pub store: BlogStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state from configuration, opening the store.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = BlogStore::open(&config.database_path)?;

        tracing::info!(
            database_path = %config.database_path.display(),
            "application state initialized"
        );

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }
}
