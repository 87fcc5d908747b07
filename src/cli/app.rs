//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::{AnalyzeCallbacks, AnalyzeError, AnalyzeInput, AnalyzeVideoUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::InvalidVideoUrlError;
use crate::domain::prompt::{PromptType, ALL_PROMPT_TYPES};
use crate::domain::video::VideoUrl;
use crate::infrastructure::{FileOutputSink, GeminiGenerator};

use super::args::AnalyzeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Overrides the Gemini API root, e.g. to point at a local mock server
pub const API_BASE_URL_ENV: &str = "TUBE_SCRIBE_API_BASE_URL";

/// Initialize the `log` backend. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Normalize a user-supplied prompt type and select it.
///
/// Unknown identifiers select the fallback template; the user is warned
/// so a typo does not go unnoticed.
pub fn resolve_prompt_type(input: &str, presenter: &Presenter) -> PromptType {
    let normalized = input.trim().to_lowercase();
    let prompt_type = PromptType::resolve(Some(normalized.as_str()));

    if prompt_type == PromptType::Fallback && normalized != PromptType::Fallback.as_str() {
        let valid: Vec<&str> = ALL_PROMPT_TYPES.iter().map(|t| t.as_str()).collect();
        presenter.warn(&format!(
            "Unknown prompt type \"{}\", using fallback. Valid: {}",
            input,
            valid.join(", ")
        ));
    }

    prompt_type
}

/// Turn the merged configuration into run options
pub fn build_options(
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<AnalyzeOptions, InvalidVideoUrlError> {
    let video = VideoUrl::parse(config.youtube_url.as_deref().unwrap_or_default())?;
    let prompt_type = match config.prompt_type.as_deref() {
        Some(input) => resolve_prompt_type(input, presenter),
        None => PromptType::default(),
    };

    Ok(AnalyzeOptions {
        video,
        prompt_type,
        model: config.model_or_default().to_string(),
        api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        api_base_url: env::var(API_BASE_URL_ENV).ok().filter(|s| !s.is_empty()),
        save: config.save_or_default(),
        output_dir: config.output_dir_or_default(),
    })
}

/// Run the one-shot analysis
pub async fn run_oneshot(options: AnalyzeOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    let Some(api_key) = options.api_key else {
        presenter.error(&AnalyzeError::MissingApiKey.to_string());
        return ExitCode::from(EXIT_ERROR);
    };

    // Create adapters
    let mut generator = GeminiGenerator::with_model(api_key, &options.model);
    if let Some(base_url) = options.api_base_url {
        generator = generator.with_base_url(base_url);
    }
    let output = FileOutputSink::new(&options.output_dir);

    let use_case = AnalyzeVideoUseCase::new(generator, output);

    let input = AnalyzeInput {
        video: options.video.clone(),
        prompt_type: options.prompt_type,
        save: options.save,
    };

    let start_presenter = Arc::clone(&presenter);
    let model = options.model.clone();
    let video = options.video.to_string();
    let end_presenter = Arc::clone(&presenter);
    let callbacks = AnalyzeCallbacks {
        on_generating_start: Some(Box::new(move |prompt_type: PromptType| {
            start_presenter.start_spinner(&format!(
                "Calling {} for {} on {}...",
                model, prompt_type, video
            ));
        })),
        on_generating_end: Some(Box::new(move || {
            end_presenter.update_spinner("Reading response...");
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.spinner_success(&format!("Generated {}", output.prompt_type.label()));
            presenter.output(&output.text);

            if let Some(path) = output.saved_to {
                presenter.success(&format!("Saved output to: {}", path.display()));
            }
            if let Some(e) = output.save_error {
                presenter.warn(&e.to_string());
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Generation failed");
            presenter.error(&e.to_string());
            if matches!(e, AnalyzeError::Extraction(_)) {
                presenter.info("Run with --verbose to see the raw response");
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Build a config from environment variables via `lookup`
pub fn config_from_env<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

    AppConfig {
        api_key: get("GOOGLE_API_KEY").or_else(|| get("GEMINI_API_KEY")),
        model: get("DEFAULT_MODEL"),
        youtube_url: get("YOUTUBE_URL"),
        prompt_type: get("PROMPT_TYPE"),
        output_dir: get("OUTPUT_DIR"),
        save: None,
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;
    let env_config = config_from_env(|key| env::var(key).ok());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
