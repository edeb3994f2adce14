//! Gemini models API schema
//!
//! Shape of the response from `GET {base}/models` on the Generative
//! Language API. Model names come back fully qualified ("models/...").

use serde::Deserialize;

/// One page of the models listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsPage {
    #[serde(default)]
    pub models: Vec<GeminiModel>,
}

/// One model entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiModel {
    /// Fully qualified resource name, e.g. "models/gemini-1.5-pro".
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GeminiModel {
    /// Model id with the "models/" resource prefix stripped.
    pub fn short_id(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_page_parsing() {
        let json = r#"{"models": [
            {"name": "models/gemini-1.5-pro", "displayName": "Gemini 1.5 Pro",
             "description": "Mid-size multimodal model"},
            {"name": "models/gemini-1.5-flash"}
        ]}"#;

        let page: ModelsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.models.len(), 2);
        assert_eq!(page.models[0].short_id(), "gemini-1.5-pro");
        assert_eq!(
            page.models[0].display_name.as_deref(),
            Some("Gemini 1.5 Pro")
        );
    }

    #[test]
    fn test_short_id_without_prefix() {
        let model = GeminiModel {
            name: "gemini-exp".to_string(),
            display_name: None,
            description: None,
        };
        assert_eq!(model.short_id(), "gemini-exp");
    }
}
