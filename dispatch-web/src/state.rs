//! Shared application state for the gateway server.

use std::sync::Arc;

use dispatch::config::GatewayConfig;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration, fixed for the lifetime of the process.
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
