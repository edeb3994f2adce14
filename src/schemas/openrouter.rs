//! OpenRouter public listing schema
//!
//! Shape of the response from `GET https://openrouter.ai/api/v1/models`.
//! Only the fields the aggregator cares about are modeled; the real payload
//! carries pricing, context length, and other metadata we ignore.

use serde::Deserialize;

/// Top-level envelope of the public models listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelListing {
    pub data: Vec<ListedModel>,
}

/// One model entry from the listing.
///
/// `organization` and `provider` are both optional and frequently absent;
/// the aggregator falls back to the id prefix and finally "Other".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListedModel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

impl ListedModel {
    /// Bare entry with only an id, as the listing sometimes returns.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
