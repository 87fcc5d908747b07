//! Generated text extraction
//!
//! Walks `candidates[0].content.parts[0].text` of a `generateContent`
//! response. The body comes from an external service, so every step checks
//! that the field exists and has the expected type before descending.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The navigation step at which extraction stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStep {
    /// No `candidates` key (or the response is not an object)
    MissingCandidates,
    /// `candidates` is present but not an array
    CandidatesNotArray,
    /// `candidates` is an empty array
    EmptyCandidates,
    /// First candidate has no `content` object
    MissingContent,
    /// `content` has no `parts` array
    MissingParts,
    /// `parts` is an empty array
    EmptyParts,
    /// First part has no `text` key
    MissingText,
    /// `text` is present but not a string
    TextNotString,
}

impl ExtractionStep {
    /// Short description used in error messages and logs
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::MissingCandidates => "response has no \"candidates\"",
            Self::CandidatesNotArray => "\"candidates\" is not an array",
            Self::EmptyCandidates => "\"candidates\" is empty",
            Self::MissingContent => "first candidate has no \"content\"",
            Self::MissingParts => "\"content\" has no \"parts\"",
            Self::EmptyParts => "\"parts\" is empty",
            Self::MissingText => "first part has no \"text\"",
            Self::TextNotString => "\"text\" is not a string",
        }
    }
}

impl fmt::Display for ExtractionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The response did not contain generated text where expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No generated text in response: {step}")]
pub struct ExtractionError {
    pub step: ExtractionStep,
}

impl From<ExtractionStep> for ExtractionError {
    fn from(step: ExtractionStep) -> Self {
        Self { step }
    }
}

/// Extract the generated text from a response body.
///
/// The text is returned exactly as received, without trimming.
pub fn extract(response: &Value) -> Result<String, ExtractionError> {
    let candidates = match response.get("candidates") {
        None | Some(Value::Null) => return Err(ExtractionStep::MissingCandidates.into()),
        Some(Value::Array(candidates)) => candidates,
        Some(_) => return Err(ExtractionStep::CandidatesNotArray.into()),
    };

    let candidate = candidates.first().ok_or(ExtractionStep::EmptyCandidates)?;

    let content = candidate
        .get("content")
        .filter(|c| c.is_object())
        .ok_or(ExtractionStep::MissingContent)?;

    let parts = content
        .get("parts")
        .and_then(Value::as_array)
        .ok_or(ExtractionStep::MissingParts)?;

    let part = parts.first().ok_or(ExtractionStep::EmptyParts)?;

    match part.get("text") {
        None => Err(ExtractionStep::MissingText.into()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ExtractionStep::TextNotString.into()),
    }
}
