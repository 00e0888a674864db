//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::InstanceStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store holding the uploaded scheduling instances
    pub store: Arc<dyn InstanceStore>,
    /// Server configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given store and configuration.
    pub fn new(store: Arc<dyn InstanceStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
