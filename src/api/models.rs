//! Aggregated models endpoint
//!
//! Implements GET /api/get-models/all: every configured provider's model
//! list in one response, with OpenRouter split into per-company groups.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::providers::available_providers;
use crate::schemas::ProviderModelGroup;
use crate::server::state::AppState;

/// GET /api/get-models/all - list all models grouped by provider
///
/// Per-provider failures are swallowed inside the aggregator; the only
/// error path here is registry construction, which maps to a 500 with an
/// `{ "error": ... }` body.
pub async fn list_all_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProviderModelGroup>>, ApiError> {
    let providers = available_providers(&state.settings)?;

    let groups = state.aggregator.aggregate(&providers).await;

    tracing::debug!(
        provider_count = providers.len(),
        group_count = groups.len(),
        "Aggregated model groups"
    );

    Ok(Json(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_registry_failure_maps_to_500_error_body() {
        let settings = Settings {
            ollama_base_url: "not a url".to_string(),
            ..Settings::default()
        };
        let state = AppState::new(settings).unwrap();

        let response = list_all_models(State(state))
            .await
            .err()
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid OLLAMA_BASE_URL"));
    }

    #[tokio::test]
    async fn test_unreachable_providers_still_yield_a_bare_array() {
        // Valid registry, but every provider points at a closed port (and
        // Gemini has no key): all contributions are skipped, not errors.
        let settings = Settings {
            ollama_base_url: "http://127.0.0.1:1".to_string(),
            openrouter_base_url: "http://127.0.0.1:1".to_string(),
            gemini_base_url: "http://127.0.0.1:1".to_string(),
            ..Settings::default()
        };
        let state = AppState::new(settings).unwrap();

        let Json(groups) = list_all_models(State(state)).await.unwrap();
        assert!(groups.is_empty());
        assert!(serde_json::to_value(&groups).unwrap().is_array());
    }
}
