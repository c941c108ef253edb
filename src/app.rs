use crate::cli::Args;
use bb_summarizer::bot::handle_message;
use bb_summarizer::config::Config;
use bb_summarizer::data_fetcher::create_http_client_with_timeout;
use bb_summarizer::error::AppError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Run the console transport.
///
/// - With `--message`, handles that single message and exits
/// - Otherwise reads chat messages from stdin, one per line, until EOF
/// - Replies go to stdout; messages that are not commands get no reply
pub async fn run_console(config: &Config, args: &Args) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    if let Some(message) = &args.message {
        if let Some(reply) = handle_message(&client, config, message).await {
            println!("{reply}");
        }
        return Ok(());
    }

    info!("Reading messages from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = handle_message(&client, config, &line).await {
            println!("{reply}");
        }
    }
    info!("Input closed, shutting down");

    Ok(())
}
