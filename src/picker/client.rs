//! Picker fetch client
//!
//! The view's single network call: fetch the aggregated model groups from
//! the gateway.

use anyhow::{Context, Result};

use crate::picker::state::ModelPicker;
use crate::schemas::ProviderModelGroup;

/// Fetch the aggregated model groups from `{base_url}/api/get-models/all`.
pub async fn fetch_model_groups(
    http: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<ProviderModelGroup>> {
    let url = format!("{}/api/get-models/all", base_url.trim_end_matches('/'));

    let response = http
        .get(&url)
        .send()
        .await
        .context("Failed to reach the model gateway")?;

    if !response.status().is_success() {
        anyhow::bail!("Model gateway returned {}", response.status());
    }

    response
        .json::<Vec<ProviderModelGroup>>()
        .await
        .context("Failed to parse model groups")
}

impl ModelPicker {
    /// Perform the view's one fetch-on-mount, ending in `Loaded` whether it
    /// succeeded or not.
    pub async fn load(&mut self, http: &reqwest::Client, base_url: &str) {
        self.begin_loading();
        let result = fetch_model_groups(http, base_url).await;
        self.finish_loading(result);
    }
}
