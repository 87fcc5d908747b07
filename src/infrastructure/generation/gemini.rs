//! Gemini API generator adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{GenerationError, Generator};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::prompt::PromptTemplate;
use crate::domain::video::VideoUrl;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Video analysis can take a while on long videos
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// Request types for Gemini API

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    FileData { file_data: FileData },
}

#[derive(Debug, Serialize)]
struct FileData {
    file_uri: String,
}

// Error body returned by the API

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
    code: Option<i32>,
}

impl ApiError {
    fn describe(&self) -> String {
        match (&self.status, self.code) {
            (Some(status), Some(code)) => format!("{} ({} {})", self.message, code, status),
            (Some(status), None) => format!("{} ({})", self.message, status),
            (None, Some(code)) => format!("{} ({})", self.message, code),
            (None, None) => self.message.clone(),
        }
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            log::warn!(
                "Could not build HTTP client with a {:?} timeout, requests will not time out: {}",
                timeout,
                e
            );
            reqwest::Client::new()
        }
    }
}

/// Gemini API generator
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Create a new Gemini generator with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new Gemini generator with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: build_client(REQUEST_TIMEOUT),
        }
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// Point the generator at a different API root (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Model this generator calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the request body: prompt text first, then the video reference
    fn build_request(&self, video: &VideoUrl, template: &PromptTemplate) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: template.text().to_string(),
                    },
                    Part::FileData {
                        file_data: FileData {
                            file_uri: video.as_str().to_string(),
                        },
                    },
                ],
            }],
        }
    }

    /// Pull an error message out of a response body, if it carries one
    fn api_error_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error.describe())
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(
        &self,
        video: &VideoUrl,
        template: &PromptTemplate,
    ) -> Result<Value, GenerationError> {
        let url = self.api_url();
        let body = self.build_request(video, template);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        log::debug!("generateContent model={} status={}", self.model, status);

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = Self::api_error_message(&error_text).unwrap_or(error_text);
            return Err(GenerationError::ApiError(format!("HTTP {}: {}", status, detail)));
        }

        let response: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.without_url().to_string()))?;

        // Check for API error object in response body
        if let Some(error) = response.get("error").filter(|e| e.is_object()) {
            let message = serde_json::from_value::<ApiError>(error.clone())
                .map(|e| e.describe())
                .unwrap_or_else(|_| error.to_string());
            return Err(GenerationError::ApiError(message));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoUrl {
        VideoUrl::parse("https://www.youtube.com/watch?v=abc").unwrap()
    }

    #[test]
    fn build_request_has_prompt_then_file_reference() {
        let generator = GeminiGenerator::new("test-key");
        let template = PromptTemplate::for_type(Default::default());

        let request = generator.build_request(&video(), &template);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        {"text": template.text()},
                        {"file_data": {"file_uri": "https://www.youtube.com/watch?v=abc"}}
                    ]
                }]
            })
        );
    }

    #[test]
    fn api_url_contains_model_and_key() {
        let generator = GeminiGenerator::new("test-api-key");
        let url = generator.api_url();

        assert!(url.starts_with(API_BASE_URL));
        assert!(url.contains("gemini-1.5-flash:generateContent"));
        assert!(url.ends_with("key=test-api-key"));
    }

    #[test]
    fn custom_model() {
        let generator = GeminiGenerator::with_model("key", "custom-model");
        assert_eq!(generator.model(), "custom-model");
        assert!(generator.api_url().contains("/custom-model:generateContent"));
    }

    #[test]
    fn custom_base_url_drops_trailing_slash() {
        let generator = GeminiGenerator::new("key").with_base_url("http://localhost:1234/");
        assert!(generator
            .api_url()
            .starts_with("http://localhost:1234/gemini-1.5-flash:generateContent"));
    }

    #[test]
    fn api_error_message_from_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            GeminiGenerator::api_error_message(body),
            Some("API key not valid (400 INVALID_ARGUMENT)".to_string())
        );
    }

    #[test]
    fn api_error_message_from_plain_text() {
        assert!(GeminiGenerator::api_error_message("Bad Gateway").is_none());
    }
}
