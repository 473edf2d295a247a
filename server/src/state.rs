//! Shared application state handed to every Axum handler.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::config::ServerConfig;

/// Cheap to clone; all handlers read the same immutable config.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
