//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, subcommand handlers,
//! and the one-shot runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod prompts_cmd;

// Re-export commonly used types
pub use app::{run_oneshot, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{AnalyzeOptions, Cli, Commands, ConfigAction};
pub use presenter::Presenter;
