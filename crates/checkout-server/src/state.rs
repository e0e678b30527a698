//! Application State

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (SDK settings, backend location)
    pub config: Arc<ServerConfig>,

    /// Client for the order backend
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }

    /// Absolute URL of `path` on the order backend
    pub fn backend_url(&self, path: &str) -> String {
        format!("{}{}", self.config.backend_url, path)
    }
}
