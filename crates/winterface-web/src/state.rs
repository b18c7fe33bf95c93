//! Application state shared across all request handlers.

use std::sync::Arc;

use winterface_node::NodeInterface;

use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// The node interface is injected here at router build time; handlers never
/// have to fish it out of ambient request context.
#[derive(Clone)]
pub struct AppState {
    /// The node this interface administers.
    pub node: Arc<dyn NodeInterface>,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Whether the server was started in development mode.
    pub dev_mode: bool,
}

impl AppState {
    /// Create a new application state from configuration and a node handle.
    pub fn new(config: Config, node: Arc<dyn NodeInterface>, dev_mode: bool) -> Self {
        tracing::info!(dev_mode, "application state initialized");
        Self {
            node,
            config: Arc::new(config),
            dev_mode,
        }
    }
}
