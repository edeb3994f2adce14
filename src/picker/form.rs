//! Generation form state
//!
//! Controlled form state surrounding the model picker: the prompt, the
//! system-prompt variant, and an optional max-token override. No
//! cross-field invariants beyond max-tokens being a positive integer or
//! unset.

/// System prompt variants offered by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemPromptChoice {
    /// Standard code generation
    #[default]
    Default,
    /// Makes non-thinking models think
    Thinking,
    /// User-supplied system prompt
    Custom,
}

/// The generate request's form fields.
#[derive(Debug, Clone, Default)]
pub struct GenerationForm {
    pub prompt: String,
    pub system_prompt: SystemPromptChoice,
    pub custom_system_prompt: String,
    max_tokens: Option<u32>,
}

impl GenerationForm {
    /// Current max-token override, if any.
    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    /// Apply raw max-tokens input. Anything that is not a positive integer
    /// resets the override to unset.
    pub fn set_max_tokens_input(&mut self, raw: &str) {
        self.max_tokens = raw.trim().parse::<u32>().ok().filter(|v| *v > 0);
    }

    /// Clear the max-token override.
    pub fn reset_max_tokens(&mut self) {
        self.max_tokens = None;
    }

    /// The custom system prompt, only when the custom variant is chosen.
    pub fn effective_custom_prompt(&self) -> Option<&str> {
        match self.system_prompt {
            SystemPromptChoice::Custom => Some(self.custom_system_prompt.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_tokens_accepts_positive_integers() {
        let mut form = GenerationForm::default();
        form.set_max_tokens_input("500");
        assert_eq!(form.max_tokens(), Some(500));
    }

    #[test]
    fn test_max_tokens_rejects_junk_input() {
        let mut form = GenerationForm::default();

        for bad in ["0", "-5", "abc", "", "  ", "1.5"] {
            form.set_max_tokens_input("500");
            form.set_max_tokens_input(bad);
            assert_eq!(form.max_tokens(), None, "input {:?}", bad);
        }
    }

    #[test]
    fn test_reset_clears_override() {
        let mut form = GenerationForm::default();
        form.set_max_tokens_input("2048");
        form.reset_max_tokens();
        assert_eq!(form.max_tokens(), None);
    }

    #[test]
    fn test_custom_prompt_only_applies_when_chosen() {
        let mut form = GenerationForm {
            custom_system_prompt: "be terse".to_string(),
            ..GenerationForm::default()
        };
        assert_eq!(form.effective_custom_prompt(), None);

        form.system_prompt = SystemPromptChoice::Custom;
        assert_eq!(form.effective_custom_prompt(), Some("be terse"));
    }
}
