//! Content generation port interface

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::prompt::PromptTemplate;
use crate::domain::video::VideoUrl;

/// Errors from the generation service.
///
/// These describe transport, authentication and API failures. A response
/// that arrives intact but lacks generated text is not a generation error.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the generative-language service
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send a prompt together with a video file reference.
    ///
    /// # Arguments
    /// * `video` - Public URL of the video to analyze
    /// * `template` - The instruction template
    ///
    /// # Returns
    /// The raw JSON response body, unvalidated
    async fn generate(
        &self,
        video: &VideoUrl,
        template: &PromptTemplate,
    ) -> Result<Value, GenerationError>;
}
