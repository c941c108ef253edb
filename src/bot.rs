//! Chat command table.
//!
//! A message is matched against the `.bb` command patterns; a match is
//! executed and turned into a reply. Failures become `Error: <message>`
//! replies, and messages that match no command get no reply at all.

use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::constants::report::PLAYER_HERO_LIMIT;
use crate::error::AppError;
use crate::report::{format_player, format_team};
use crate::summary::{resolve_player, summarize_team};

static HELP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.bb help$").expect("help pattern is valid"));
static STAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.bb stat (.+)$").expect("stat pattern is valid"));
static SUMMARIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.bb summarize (.+)$").expect("summarize pattern is valid"));

pub const HELP_TEXT: &str = "\
**bb commands**
`.bb help` - show this message
`.bb stat <BattleTag>` - summarize one player, e.g. `.bb stat Name#1234`
`.bb summarize <team page>` - summarize a TESPA team, e.g. `.bb summarize https://compete.tespa.org/tournament/111/team/1234`
";

/// A recognized chat command with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Stat(String),
    Summarize(String),
}

impl Command {
    /// Matches a chat message against the command patterns.
    pub fn parse(message: &str) -> Option<Self> {
        let message = message.trim_end_matches(['\r', '\n']);

        if HELP_PATTERN.is_match(message) {
            return Some(Command::Help);
        }
        if let Some(captures) = STAT_PATTERN.captures(message) {
            return Some(Command::Stat(captures[1].to_string()));
        }
        if let Some(captures) = SUMMARIZE_PATTERN.captures(message) {
            return Some(Command::Summarize(captures[1].to_string()));
        }
        None
    }

    /// Runs the command and renders its reply.
    #[instrument(skip(client, config))]
    pub async fn execute(&self, client: &Client, config: &Config) -> Result<String, AppError> {
        match self {
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Stat(handle) => {
                let summary = resolve_player(client, config, handle).await?;
                Ok(format_player(&summary, PLAYER_HERO_LIMIT))
            }
            Command::Summarize(url) => {
                let summary = summarize_team(client, config, url).await?;
                Ok(format_team(&summary))
            }
        }
    }
}

/// Turns a command outcome into the text that is sent back.
pub fn reply_text(result: Result<String, AppError>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => format!("Error: {e}"),
    }
}

/// Handles one chat message.
///
/// Returns `None` when the message is not a command. The reply is held back
/// until at least `config.min_reply_delay_ms` has passed.
pub async fn handle_message(client: &Client, config: &Config, message: &str) -> Option<String> {
    let command = Command::parse(message)?;
    info!("Handling command {:?}", command);

    let min_delay = tokio::time::sleep(Duration::from_millis(config.min_reply_delay_ms));
    let (result, _) = tokio::join!(command.execute(client, config), min_delay);

    if let Err(e) = &result {
        error!("Command {:?} failed: {}", command, e);
    }
    Some(reply_text(result))
}
