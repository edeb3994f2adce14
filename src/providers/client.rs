//! Provider client abstraction
//!
//! Each configured provider gets a client that can list its models. The
//! trait is the seam the aggregator mocks in tests; `HttpClientFactory`
//! builds the real clients over a shared reqwest client.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Settings;
use crate::providers::{GeminiClient, OllamaClient, OpenRouterClient, ProviderInfo};
use crate::schemas::openrouter::ModelListing;
use crate::schemas::ModelSummary;

/// Errors that can occur when talking to a provider backend.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Provider does not expose a full model listing")]
    ListingUnsupported,
}

/// A client for one provider backend.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// List the provider's models.
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError>;

    /// Fetch the provider's full public model listing with per-model
    /// metadata. Only OpenRouter supports this; everyone else declines.
    async fn full_listing(&self) -> Result<ModelListing, ProviderError> {
        Err(ProviderError::ListingUnsupported)
    }
}

/// Maps a registry entry to a client. The aggregator depends on this trait
/// so tests can substitute failing or canned clients.
pub trait ClientFactory: Send + Sync {
    fn client_for(&self, provider: &ProviderInfo)
        -> Result<Box<dyn ProviderClient>, ProviderError>;
}

/// Production factory backed by a shared HTTP client.
pub struct HttpClientFactory {
    http: reqwest::Client,
    settings: Arc<Settings>,
}

impl HttpClientFactory {
    pub fn new(http: reqwest::Client, settings: Arc<Settings>) -> Self {
        Self { http, settings }
    }
}

impl ClientFactory for HttpClientFactory {
    fn client_for(
        &self,
        provider: &ProviderInfo,
    ) -> Result<Box<dyn ProviderClient>, ProviderError> {
        match provider.id.as_str() {
            "ollama" => Ok(Box::new(OllamaClient::new(
                self.http.clone(),
                self.settings.ollama_base_url.clone(),
            ))),
            "openrouter" => Ok(Box::new(OpenRouterClient::new(
                self.http.clone(),
                self.settings.openrouter_base_url.clone(),
                self.settings.openrouter_api_key.clone(),
            ))),
            "gemini" => Ok(Box::new(GeminiClient::new(
                self.http.clone(),
                self.settings.gemini_base_url.clone(),
                self.settings.gemini_api_key.clone(),
            ))),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::registry::available_providers;

    #[test]
    fn test_factory_covers_every_registered_provider() {
        let settings = Arc::new(Settings::default());
        let factory = HttpClientFactory::new(reqwest::Client::new(), settings.clone());

        for provider in available_providers(&settings).unwrap() {
            assert!(factory.client_for(&provider).is_ok(), "{}", provider.id);
        }
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let factory =
            HttpClientFactory::new(reqwest::Client::new(), Arc::new(Settings::default()));
        let bogus = ProviderInfo {
            id: "bogus".to_string(),
            name: "Bogus".to_string(),
            description: String::new(),
            is_local: false,
            examples: vec![],
        };
        assert!(matches!(
            factory.client_for(&bogus),
            Err(ProviderError::UnknownProvider(_))
        ));
    }
}
