//! Model picker view-model
//!
//! Client-side state for the model selection view: the one-shot fetch of
//! aggregated groups, company/model selection, and the generation form.

pub mod client;
pub mod form;
pub mod state;

pub use client::fetch_model_groups;
pub use form::{GenerationForm, SystemPromptChoice};
pub use state::{ModelPicker, ModelSelection, ModelsState};
