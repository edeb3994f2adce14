//! Model picker view-model
//!
//! State behind the model selection view: the aggregated groups fetched
//! once on mount, the OpenRouter company selector, the current
//! (model, provider) selection, and the surrounding generation form.

use crate::picker::form::GenerationForm;
use crate::providers::OPENROUTER_PROVIDER_ID;
use crate::schemas::ProviderModelGroup;

/// Loading state of the aggregated model list.
///
/// There is no error state: a failed fetch lands in `Loaded` with an empty
/// list, and the view shows its usual "no models" presentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModelsState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<ProviderModelGroup>),
}

/// The user's selected model and its owning provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub model_id: String,
    pub provider_id: String,
}

/// View-model for the picker.
#[derive(Debug, Clone, Default)]
pub struct ModelPicker {
    state: ModelsState,
    selected_company: Option<String>,
    selection: Option<ModelSelection>,
    pub form: GenerationForm,
}

impl ModelPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModelsState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ModelsState::Loading
    }

    /// Mark the single fetch as started.
    pub fn begin_loading(&mut self) {
        self.state = ModelsState::Loading;
    }

    /// Finish the fetch. A failed fetch loads an empty group list.
    pub fn finish_loading(&mut self, result: anyhow::Result<Vec<ProviderModelGroup>>) {
        let groups = result.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Model fetch failed, showing empty list");
            Vec::new()
        });
        self.state = ModelsState::Loaded(groups);
    }

    fn groups(&self) -> &[ProviderModelGroup] {
        match &self.state {
            ModelsState::Loaded(groups) => groups,
            _ => &[],
        }
    }

    /// OpenRouter company groups, in response order.
    pub fn openrouter_groups(&self) -> Vec<&ProviderModelGroup> {
        self.groups()
            .iter()
            .filter(|g| g.provider.id == OPENROUTER_PROVIDER_ID)
            .collect()
    }

    /// Every non-OpenRouter group; always rendered unconditionally.
    pub fn other_groups(&self) -> Vec<&ProviderModelGroup> {
        self.groups()
            .iter()
            .filter(|g| g.provider.id != OPENROUTER_PROVIDER_ID)
            .collect()
    }

    /// Company labels for the secondary selector.
    pub fn companies(&self) -> Vec<&str> {
        self.openrouter_groups()
            .iter()
            .map(|g| company_label(g))
            .collect()
    }

    /// Choose a company; the visible OpenRouter list swaps to its models.
    pub fn select_company(&mut self, company: impl Into<String>) {
        self.selected_company = Some(company.into());
    }

    /// The OpenRouter group currently on display: the selected company's,
    /// defaulting to the first group in the response.
    pub fn visible_openrouter_group(&self) -> Option<&ProviderModelGroup> {
        let groups = self.openrouter_groups();
        match &self.selected_company {
            Some(company) => groups
                .iter()
                .find(|g| company_label(g) == company)
                .copied()
                .or_else(|| groups.first().copied()),
            None => groups.first().copied(),
        }
    }

    /// Select a model, recording both halves of the selection.
    pub fn select_model(&mut self, model_id: impl Into<String>, provider_id: impl Into<String>) {
        self.selection = Some(ModelSelection {
            model_id: model_id.into(),
            provider_id: provider_id.into(),
        });
    }

    pub fn selection(&self) -> Option<&ModelSelection> {
        self.selection.as_ref()
    }

    /// Whether the generate action is enabled: a non-blank prompt and a
    /// selected model.
    pub fn can_generate(&self) -> bool {
        !self.form.prompt.trim().is_empty() && self.selection.is_some()
    }
}

/// Label identifying a company group: its company field, falling back to
/// the group's display name.
fn company_label(group: &ProviderModelGroup) -> &str {
    group
        .provider
        .company
        .as_deref()
        .unwrap_or(&group.provider.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ModelSummary, ProviderDescriptor};

    fn company_group(company: &str, model_id: &str) -> ProviderModelGroup {
        ProviderModelGroup {
            provider: ProviderDescriptor {
                id: OPENROUTER_PROVIDER_ID.to_string(),
                name: format!("OpenRouter ({})", company),
                description: format!("Models by {} via OpenRouter", company),
                is_local: false,
                examples: None,
                company: Some(company.to_string()),
            },
            models: vec![ModelSummary::new(model_id, model_id)],
        }
    }

    fn plain_group(id: &str, model_id: &str) -> ProviderModelGroup {
        ProviderModelGroup {
            provider: ProviderDescriptor {
                id: id.to_string(),
                name: id.to_string(),
                description: format!("{} models", id),
                is_local: id == "ollama",
                examples: Some(vec![]),
                company: None,
            },
            models: vec![ModelSummary::new(model_id, model_id)],
        }
    }

    fn loaded_picker() -> ModelPicker {
        let mut picker = ModelPicker::new();
        picker.begin_loading();
        picker.finish_loading(Ok(vec![
            company_group("A", "a/one"),
            company_group("B", "b/one"),
            plain_group("ollama", "llama3"),
        ]));
        picker
    }

    #[test]
    fn test_load_state_transitions() {
        let mut picker = ModelPicker::new();
        assert_eq!(picker.state(), &ModelsState::NotLoaded);

        picker.begin_loading();
        assert!(picker.is_loading());

        picker.finish_loading(Ok(vec![]));
        assert_eq!(picker.state(), &ModelsState::Loaded(vec![]));
    }

    #[test]
    fn test_fetch_failure_loads_empty_list() {
        let mut picker = ModelPicker::new();
        picker.begin_loading();
        picker.finish_loading(Err(anyhow::anyhow!("network down")));

        assert_eq!(picker.state(), &ModelsState::Loaded(vec![]));
        assert!(picker.companies().is_empty());
        assert!(picker.other_groups().is_empty());
    }

    #[test]
    fn test_partition_by_provider() {
        let picker = loaded_picker();
        assert_eq!(picker.openrouter_groups().len(), 2);
        assert_eq!(picker.other_groups().len(), 1);
        assert_eq!(picker.companies(), ["A", "B"]);
    }

    #[test]
    fn test_company_selector_defaults_to_first_group() {
        let picker = loaded_picker();
        let visible = picker.visible_openrouter_group().unwrap();
        assert_eq!(visible.provider.company.as_deref(), Some("A"));
        assert_eq!(visible.models[0].id, "a/one");
    }

    #[test]
    fn test_selecting_a_company_swaps_the_visible_list() {
        let mut picker = loaded_picker();
        picker.select_company("B");

        let visible = picker.visible_openrouter_group().unwrap();
        assert_eq!(visible.models[0].id, "b/one");

        // Plain groups are unaffected by the company selector
        assert_eq!(picker.other_groups()[0].models[0].id, "llama3");
    }

    #[test]
    fn test_unknown_company_falls_back_to_first() {
        let mut picker = loaded_picker();
        picker.select_company("missing");

        let visible = picker.visible_openrouter_group().unwrap();
        assert_eq!(visible.provider.company.as_deref(), Some("A"));
    }

    #[test]
    fn test_select_model_records_provider_too() {
        let mut picker = loaded_picker();
        picker.select_model("b/one", OPENROUTER_PROVIDER_ID);

        let selection = picker.selection().unwrap();
        assert_eq!(selection.model_id, "b/one");
        assert_eq!(selection.provider_id, "openrouter");
    }

    #[test]
    fn test_generate_requires_prompt_and_selection() {
        let mut picker = loaded_picker();
        assert!(!picker.can_generate());

        picker.form.prompt = "   ".to_string();
        picker.select_model("llama3", "ollama");
        assert!(!picker.can_generate());

        picker.form.prompt = "a portfolio site".to_string();
        assert!(picker.can_generate());
    }
}
