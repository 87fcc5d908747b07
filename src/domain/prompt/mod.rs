//! Prompt domain module

mod prompt_type;
mod template;

pub use prompt_type::{PromptType, ALL_PROMPT_TYPES};
pub use template::{select, PromptTemplate};
