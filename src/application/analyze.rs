//! Analyze video use case

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prompt::{PromptTemplate, PromptType};
use crate::domain::response::{extract, ExtractionError};
use crate::domain::video::VideoUrl;

use super::ports::{GenerationError, Generator, OutputError, OutputSink};

/// Errors from the analyze use case
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Missing API key. Set GOOGLE_API_KEY, pass --api-key, or run 'tube-scribe config set api_key <key>'")]
    MissingApiKey,
}

/// Input parameters for the analyze use case
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    /// Video passed to the service as a file reference
    pub video: VideoUrl,
    /// Which instruction template to send
    pub prompt_type: PromptType,
    /// Whether to save the result through the output sink
    pub save: bool,
}

/// Output from the analyze use case
#[derive(Debug)]
pub struct AnalyzeOutput {
    /// The generated text, exactly as returned
    pub text: String,
    pub prompt_type: PromptType,
    /// Where the text was saved (if enabled and successful)
    pub saved_to: Option<PathBuf>,
    /// Why saving failed (if enabled and failed)
    pub save_error: Option<OutputError>,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct AnalyzeCallbacks {
    /// Called before the request is sent, with the prompt type
    pub on_generating_start: Option<Box<dyn Fn(PromptType) + Send + Sync>>,
    /// Called once a response body has been received
    pub on_generating_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot video analysis use case
pub struct AnalyzeVideoUseCase<G, O>
where
    G: Generator,
    O: OutputSink,
{
    generator: G,
    output: O,
}

impl<G, O> AnalyzeVideoUseCase<G, O>
where
    G: Generator,
    O: OutputSink,
{
    /// Create a new use case instance
    pub fn new(generator: G, output: O) -> Self {
        Self { generator, output }
    }

    /// Execute the analysis workflow
    pub async fn execute(
        &self,
        input: AnalyzeInput,
        callbacks: AnalyzeCallbacks,
    ) -> Result<AnalyzeOutput, AnalyzeError> {
        let template = PromptTemplate::for_type(input.prompt_type);

        if let Some(ref cb) = callbacks.on_generating_start {
            cb(input.prompt_type);
        }

        log::debug!(
            "Requesting prompt_type={} for {}",
            input.prompt_type,
            input.video
        );
        let response = self.generator.generate(&input.video, &template).await?;

        if let Some(ref cb) = callbacks.on_generating_end {
            cb();
        }

        let text = extract(&response).map_err(|e| {
            log::warn!("Extraction stopped: {}", e.step);
            log::debug!("Raw response: {}", response);
            e
        })?;

        // Saving is non-fatal; the text is still returned
        let (saved_to, save_error) = if input.save {
            match self.output.save(&text, input.prompt_type).await {
                Ok(path) => (Some(path), None),
                Err(e) => {
                    log::warn!("Saving output failed: {}", e);
                    (None, Some(e))
                }
            }
        } else {
            (None, None)
        };

        Ok(AnalyzeOutput {
            text,
            prompt_type: input.prompt_type,
            saved_to,
            save_error,
        })
    }
}
