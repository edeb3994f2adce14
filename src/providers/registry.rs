//! Configured provider registry
//!
//! The registry is the list of provider backends the gateway will query for
//! models. It is rebuilt per request from settings, mirroring the one step
//! of aggregation whose failure is systemic rather than per-provider.

use anyhow::{Context, Result};
use reqwest::Url;

use crate::config::Settings;

/// Provider id of the special-cased aggregate gateway whose model list is
/// regrouped by company.
pub const OPENROUTER_PROVIDER_ID: &str = "openrouter";

/// A configured provider backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_local: bool,
    pub examples: Vec<String>,
}

impl ProviderInfo {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        is_local: bool,
        examples: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            is_local,
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Whether this provider gets the company regrouping treatment.
    pub fn is_openrouter(&self) -> bool {
        self.id == OPENROUTER_PROVIDER_ID
    }
}

/// Build the list of configured providers.
///
/// Base URLs are validated here so that a misconfigured deployment fails
/// the whole request (500) instead of being silently skipped per provider.
pub fn available_providers(settings: &Settings) -> Result<Vec<ProviderInfo>> {
    for (label, url) in [
        ("OLLAMA_BASE_URL", &settings.ollama_base_url),
        ("OPENROUTER_BASE_URL", &settings.openrouter_base_url),
        ("GEMINI_BASE_URL", &settings.gemini_base_url),
    ] {
        Url::parse(url).with_context(|| format!("Invalid {}: {}", label, url))?;
    }

    Ok(vec![
        ProviderInfo::new(
            "ollama",
            "Ollama",
            "Run open-source models on your own machine",
            true,
            &["llama3", "mistral", "gemma"],
        ),
        ProviderInfo::new(
            OPENROUTER_PROVIDER_ID,
            "OpenRouter",
            "One gateway to models from many companies",
            false,
            &[],
        ),
        ProviderInfo::new(
            "gemini",
            "Google Gemini",
            "Google's multimodal model family",
            false,
            &["gemini-1.5-pro", "gemini-1.5-flash"],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_default_settings() {
        let providers = available_providers(&Settings::default()).unwrap();
        assert_eq!(providers.len(), 3);
        assert!(providers.iter().any(|p| p.is_openrouter()));
        assert!(providers.iter().any(|p| p.id == "ollama" && p.is_local));
    }

    #[test]
    fn test_invalid_base_url_is_systemic() {
        let settings = Settings {
            ollama_base_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(available_providers(&settings).is_err());
    }
}
