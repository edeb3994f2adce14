//! Gemini provider client
//!
//! Lists models from the Generative Language API. The listing requires an
//! API key (passed as a query parameter); without one the provider is
//! skipped by the aggregator rather than failing the request.

use async_trait::async_trait;
use reqwest::Client;

use crate::providers::client::{ProviderClient, ProviderError};
use crate::schemas::gemini::ModelsPage;
use crate::schemas::ModelSummary;

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(http: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ProviderClient for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError> {
        let key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey)?;
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));

        let response = self.http.get(&url).query(&[("key", key)]).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let page: ModelsPage = response.json().await?;
        tracing::debug!(count = page.models.len(), "Listed Gemini models");

        Ok(page
            .models
            .into_iter()
            .map(|m| {
                let id = m.short_id().to_string();
                ModelSummary {
                    name: m.display_name.unwrap_or_else(|| id.clone()),
                    id,
                    description: m.description,
                }
            })
            .collect())
    }
}
