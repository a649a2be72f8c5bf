//! Server shared state
//!
//! Holds configuration and the currently selected random source for the
//! HTTP server. Engines are constructed per request; they are cheap, and a
//! fresh engine keeps generation state isolated between requests.

use crate::config::Config;
use crate::generator::QuantumRng;
use crate::rng::get_source_with_key;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// Current random source
    source_name: RwLock<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let source_name = config.defaults.source.clone();
        Self {
            config: Arc::new(RwLock::new(config)),
            source_name: RwLock::new(source_name),
        }
    }

    /// Build an engine over the current source (no results cache)
    pub async fn engine(&self) -> QuantumRng {
        let name = self.source_name.read().await.clone();
        let api_key = {
            let config = self.config.read().await;
            if config.api_keys.anu.is_empty() {
                None
            } else {
                Some(config.api_keys.anu.clone())
            }
        };
        QuantumRng::new(get_source_with_key(&name, api_key.as_deref()))
    }

    /// Get current source name
    pub async fn source_name(&self) -> String {
        self.source_name.read().await.clone()
    }

    /// Set the current random source
    pub async fn set_source(&self, name: &str) {
        let mut source_name = self.source_name.write().await;
        *source_name = name.to_string();
    }
}
