//! Ollama local API schema
//!
//! Shape of the response from `GET {base}/api/tags` on a local Ollama
//! daemon.

use serde::Deserialize;

/// Response envelope of the tags (installed models) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<InstalledModel>,
}

/// One locally installed model.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledModel {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_response_parsing() {
        let json = r#"{"models": [
            {"name": "llama3:8b", "size": 4661224676, "digest": "abc"},
            {"name": "mistral:latest"}
        ]}"#;

        let tags: TagsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tags.models.len(), 2);
        assert_eq!(tags.models[0].name, "llama3:8b");
    }

    #[test]
    fn test_empty_daemon() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.models.is_empty());
    }
}
