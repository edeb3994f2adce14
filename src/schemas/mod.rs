//! Wire schemas
//!
//! Serde types for the aggregated response and for each upstream
//! provider's listing payload.

pub mod gemini;
pub mod models;
pub mod ollama;
pub mod openrouter;

pub use models::{ErrorBody, ModelSummary, ProviderDescriptor, ProviderModelGroup};
