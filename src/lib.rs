//! TESPA team and Overwatch player summaries for chat.
//!
//! This library scrapes a TESPA team page for its roster, looks every player
//! up concurrently, and renders the outcome as a text report. Players that
//! cannot be looked up are reported next to the ones that could.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bb_summarizer::config::Config;
//! use bb_summarizer::data_fetcher::create_http_client_with_timeout;
//! use bb_summarizer::error::AppError;
//! use bb_summarizer::report::format_team;
//! use bb_summarizer::summary::summarize_team;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let summary = summarize_team(
//!         &client,
//!         &config,
//!         "https://compete.tespa.org/tournament/111/team/1234",
//!     )
//!     .await?;
//!
//!     println!("{}", format_team(&summary));
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod summary;

// Re-export commonly used types for convenience
pub use bot::{Command, handle_message};
pub use config::Config;
pub use error::AppError;
pub use summary::{PlayerSummary, TeamSummary, Tier, resolve_player, summarize_team};
