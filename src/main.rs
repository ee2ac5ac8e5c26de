// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use courtside_stats::config::Config;
use courtside_stats::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    commands::validate_args(&args)?;

    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let (log_file_path, _guard) = logging::setup_logging(&args, config_log_path.as_ref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.is_config_mode() {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    commands::apply_arg_overrides(&mut config, &args)?;

    if args.is_query_mode() {
        return commands::handle_query_command(&args, &config).await;
    }

    commands::handle_serve_command(&config).await
}
