//! Domain error types

use thiserror::Error;

/// Error when a prompt type identifier is not one of the known types.
///
/// Only strict parsing produces this. Template selection never fails and
/// resolves unknown identifiers to the fallback template instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid prompt type: \"{input}\". Valid prompt types are: transcript, timestamps, summary, scene, clips, fallback")]
pub struct InvalidPromptTypeError {
    pub input: String,
}

/// Error when a video URL cannot be used as a file reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidVideoUrlError {
    #[error("No YouTube URL provided. Use --youtube-url or set YOUTUBE_URL in .env")]
    Empty,

    #[error("Invalid video URL \"{input}\": {reason}")]
    Malformed { input: String, reason: String },

    #[error("Unsupported URL scheme \"{scheme}\". Expected http or https")]
    UnsupportedScheme { scheme: String },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
