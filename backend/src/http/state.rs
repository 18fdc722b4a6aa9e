//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::models::Dataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup, read-only for the process lifetime
    pub dataset: Arc<Dataset>,
    /// Resolved configuration (sidebar text, dataset name)
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    /// Create a new application state from a loaded dataset.
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }

    pub fn dataset_name(&self) -> &str {
        &self.config.data.dataset_name
    }
}
