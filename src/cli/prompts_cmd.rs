//! Prompts command handler

use crate::domain::prompt::{PromptTemplate, ALL_PROMPT_TYPES};

use super::app::resolve_prompt_type;
use super::presenter::Presenter;

/// List prompt types, or print the template selected for one
pub fn handle_prompts_command(prompt_type: Option<String>, presenter: &Presenter) {
    match prompt_type {
        None => {
            for prompt_type in ALL_PROMPT_TYPES {
                presenter.key_value(prompt_type.as_str(), prompt_type.label());
            }
        }
        Some(input) => {
            let prompt_type = resolve_prompt_type(&input, presenter);
            presenter.output(PromptTemplate::for_type(prompt_type).text());
        }
    }
}
