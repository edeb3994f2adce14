//! Application state container
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. Cheaply cloneable via Arc.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::providers::HttpClientFactory;
use crate::services::ModelAggregator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Model aggregator over the configured provider clients
    pub aggregator: Arc<ModelAggregator>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.provider_timeout_seconds))
            .build()?;

        let factory = HttpClientFactory::new(http, settings.clone());
        let aggregator = Arc::new(ModelAggregator::new(Arc::new(factory)));

        tracing::info!("Application state initialized");

        Ok(Self {
            settings,
            aggregator,
            start_time: Instant::now(),
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_from_default_settings() {
        let state = AppState::new(Settings::default()).unwrap();
        assert_eq!(state.settings.port, 8000);
    }
}
