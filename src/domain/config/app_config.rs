//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::prompt::PromptType;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Directory for saved outputs when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub youtube_url: Option<String>,
    pub prompt_type: Option<String>,
    pub output_dir: Option<String>,
    pub save: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            youtube_url: None,
            prompt_type: Some(PromptType::default().to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            save: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            youtube_url: other.youtube_url.or(self.youtube_url),
            prompt_type: other.prompt_type.or(self.prompt_type),
            output_dir: other.output_dir.or(self.output_dir),
            save: other.save.or(self.save),
        }
    }

    /// Get model, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Get output directory, or `outputs` if not set
    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_OUTPUT_DIR),
        )
    }

    /// Get save setting, or false if not set
    pub fn save_or_default(&self) -> bool {
        self.save.unwrap_or(false)
    }
}
