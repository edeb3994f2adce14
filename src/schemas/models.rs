//! Aggregated model-list wire types
//!
//! These are the types returned by GET /api/get-models/all and consumed
//! by the picker view-model.

use serde::{Deserialize, Serialize};

/// A single selectable model, scoped to its provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModelSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Provider descriptor attached to each group in the response.
///
/// Plain provider groups carry `examples`; OpenRouter company groups carry
/// `company` instead. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "isLocal")]
    pub is_local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// One provider group in the aggregated response: a descriptor plus the
/// models attributed to it. Every model belongs to exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderModelGroup {
    pub provider: ProviderDescriptor,
    pub models: Vec<ModelSummary>,
}

/// Body of the endpoint's 500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
