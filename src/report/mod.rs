//! Plain-text chat replies for player and team summaries.

pub mod formatting;

pub use formatting::{format_player, format_team};
