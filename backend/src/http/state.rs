//! Application state for the HTTP server.

use crate::data::Dataset;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The immutable source dataset loaded at startup
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new application state with the given dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
