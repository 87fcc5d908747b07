//! Output sink port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prompt::PromptType;

/// Output errors
#[derive(Debug, Clone, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write output file {path}: {message}")]
    Write { path: String, message: String },
}

/// Port for persisting generated text
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Save text produced for a prompt type, returning where it was written
    async fn save(&self, text: &str, prompt_type: PromptType) -> Result<PathBuf, OutputError>;
}
