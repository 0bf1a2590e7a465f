//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared application state passed to all handlers.
///
/// The dataset is loaded once at startup and never mutated; handlers only
/// read from it, so a plain `Arc` is all the sharing needed.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
