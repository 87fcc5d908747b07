//! TubeScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use tube_scribe::cli::{
    app::{build_options, init_logging, load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    prompts_cmd::handle_prompts_command,
};
use tube_scribe::domain::config::AppConfig;
use tube_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Prompts { prompt_type }) => {
            handle_prompts_command(prompt_type, &presenter);
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: cli.api_key,
        model: cli.model,
        youtube_url: cli.youtube_url,
        prompt_type: cli.prompt_type,
        output_dir: cli.output_dir,
        save: if cli.save { Some(true) } else { None },
    };

    // Merge config
    let store = XdgConfigStore::new();
    let config = load_merged_config(&store, cli_config).await;

    let options = match build_options(&config, &presenter) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_oneshot(options).await
}
