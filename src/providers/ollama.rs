//! Ollama provider client
//!
//! Lists the models installed on a local Ollama daemon via its tags
//! endpoint. No authentication; the daemon is assumed to be on localhost.

use async_trait::async_trait;
use reqwest::Client;

use crate::providers::client::{ProviderClient, ProviderError};
use crate::schemas::ollama::TagsResponse;
use crate::schemas::ModelSummary;

pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl ProviderClient for OllamaClient {
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError> {
        let url = format!("{}/api/tags", self.base_url.trim_end_matches('/'));

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let tags: TagsResponse = response.json().await?;
        tracing::debug!(count = tags.models.len(), "Listed Ollama models");

        Ok(tags
            .models
            .into_iter()
            .map(|m| ModelSummary::new(m.name.clone(), m.name))
            .collect())
    }
}
