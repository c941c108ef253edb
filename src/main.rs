// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use bb_summarizer::config::Config;
use bb_summarizer::error::AppError;
use clap::Parser;
use cli::{Args, is_config_update};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations don't need logging or network access
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run_console(&config, &args).await
}
