//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::prompt::PromptType;
use crate::domain::video::VideoUrl;

/// Exit code table shown under `--help`
const EXIT_CODES_HELP: &str = "Exit codes:
  0  success
  1  missing API key, request failure or unusable response
  2  usage error (missing or invalid YouTube URL)

Note: usage errors exit 2 and API errors exit 1, the reverse of the earlier
Python script.";

/// TubeScribe - turn a YouTube video into text with Google Gemini
#[derive(Parser, Debug)]
#[command(name = "tube-scribe")]
#[command(version)]
#[command(about = "Turn a YouTube video into a transcript, summary, scene description or clip list using Google Gemini")]
#[command(long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
pub struct Cli {
    /// Public YouTube URL to analyze
    #[arg(short = 'y', long, value_name = "URL")]
    pub youtube_url: Option<String>,

    /// Prompt type: transcript, timestamps, summary, scene, clips, fallback
    #[arg(short = 'p', long, value_name = "TYPE")]
    pub prompt_type: Option<String>,

    /// Model name to call
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Save result to the output directory
    #[arg(long)]
    pub save: bool,

    /// Directory for saved results
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Google API key (overrides env and config file)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List prompt types, or print the template a prompt type selects
    Prompts {
        /// Prompt type whose template to print
        prompt_type: Option<String>,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for a one-shot analysis
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub video: VideoUrl,
    pub prompt_type: PromptType,
    pub model: String,
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub save: bool,
    pub output_dir: std::path::PathBuf,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "youtube_url",
    "prompt_type",
    "output_dir",
    "save",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
