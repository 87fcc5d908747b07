//! Domain layer - Core business logic
//!
//! Contains value objects, the prompt selector, the response extractor,
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod prompt;
pub mod response;
pub mod video;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use prompt::{select, PromptTemplate, PromptType, ALL_PROMPT_TYPES};
pub use response::{extract, ExtractionError, ExtractionStep};
pub use video::VideoUrl;
