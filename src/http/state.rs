//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The derived dataset, loaded once at startup
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new application state around the loaded dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
