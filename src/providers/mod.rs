//! Provider backends
//!
//! The registry of configured providers and the per-provider clients used
//! to list their models.

pub mod client;
pub mod gemini;
pub mod ollama;
pub mod openrouter;
pub mod registry;

pub use client::{ClientFactory, HttpClientFactory, ProviderClient, ProviderError};
pub use gemini::GeminiClient;
pub use ollama::OllamaClient;
pub use openrouter::OpenRouterClient;
pub use registry::{available_providers, ProviderInfo, OPENROUTER_PROVIDER_ID};
