//! Application state for the Workforce Analytics API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded snapshot behind an `Arc`. Handlers only read it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given loaded data.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the loaded data.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
