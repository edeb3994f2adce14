//! OpenRouter provider client
//!
//! Talks to OpenRouter's public models listing. The listing is readable
//! without credentials; a configured API key is attached as a bearer token
//! to get the authenticated (un-throttled) variant.

use async_trait::async_trait;
use reqwest::Client;

use crate::providers::client::{ProviderClient, ProviderError};
use crate::schemas::openrouter::ModelListing;
use crate::schemas::ModelSummary;

pub struct OpenRouterClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenRouterClient {
    pub fn new(http: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    async fn fetch_listing(&self) -> Result<ModelListing, ProviderError> {
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let listing: ModelListing = response.json().await?;
        tracing::debug!(count = listing.data.len(), "Fetched OpenRouter listing");

        Ok(listing)
    }
}

#[async_trait]
impl ProviderClient for OpenRouterClient {
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError> {
        let listing = self.fetch_listing().await?;

        Ok(listing
            .data
            .into_iter()
            .map(|m| ModelSummary {
                name: m.name.unwrap_or_else(|| m.id.clone()),
                id: m.id,
                description: m.description,
            })
            .collect())
    }

    async fn full_listing(&self) -> Result<ModelListing, ProviderError> {
        self.fetch_listing().await
    }
}
