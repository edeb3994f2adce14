//! Application settings and configuration
//!
//! Settings are loaded from environment variables (optionally via a .env
//! file) with sensible defaults for local development.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => anyhow::bail!(
                "Invalid environment: {}. Expected: development, staging, or production",
                s
            ),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub log_level: String,

    // Server settings
    pub host: String,
    pub port: u16,

    // Provider endpoints
    pub ollama_base_url: String,
    pub openrouter_base_url: String,
    pub gemini_base_url: String,

    // Provider credentials (never serialized)
    #[serde(skip_serializing)]
    pub openrouter_api_key: Option<String>,
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,

    /// Timeout applied to each upstream provider request
    pub provider_timeout_seconds: u64,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "sitegen-gateway"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: env_or_default("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env_or_default("LOG_LEVEL", "info"),

            host: env_or_default("HOST", "0.0.0.0"),
            port: env_or_default("PORT", "8000")
                .parse()
                .context("Invalid PORT value")?,

            ollama_base_url: env_or_default("OLLAMA_BASE_URL", "http://localhost:11434"),
            openrouter_base_url: env_or_default(
                "OPENROUTER_BASE_URL",
                "https://openrouter.ai/api/v1",
            ),
            gemini_base_url: env_or_default(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),

            openrouter_api_key: env::var("OPENROUTER_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),

            provider_timeout_seconds: env_or_default("PROVIDER_TIMEOUT_SECONDS", "30")
                .parse()
                .context("Invalid PROVIDER_TIMEOUT_SECONDS value")?,
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }

        if self.provider_timeout_seconds == 0 {
            anyhow::bail!("provider_timeout_seconds must be > 0");
        }

        if self.environment == Environment::Production && self.openrouter_api_key.is_none() {
            tracing::warn!("No OpenRouter API key configured; the public listing is rate-limited");
        }

        Ok(())
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "sitegen-gateway".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            ollama_base_url: "http://localhost:11434".to_string(),
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            openrouter_api_key: None,
            gemini_api_key: None,
            provider_timeout_seconds: 30,
        }
    }
}

/// Helper function to get environment variable with default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "sitegen-gateway");
        assert_eq!(settings.port, 8000);
        assert!(settings.openrouter_api_key.is_none());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("nope".parse::<Environment>().is_err());
    }

    #[test]
    fn test_server_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_invalid_timeout_env_is_rejected() {
        std::env::set_var("PROVIDER_TIMEOUT_SECONDS", "abc");
        let result = Settings::load();
        std::env::remove_var("PROVIDER_TIMEOUT_SECONDS");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let settings = Settings {
            provider_timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
