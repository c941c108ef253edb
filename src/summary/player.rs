use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

use super::models::{HeroPlaytime, PlayerSummary};
use crate::config::Config;
use crate::data_fetcher::models::{ProfileResponse, StatsResponse};
use crate::data_fetcher::{fetch_profile, fetch_stats};
use crate::error::AppError;

static BATTLETAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^#]+)#([0-9]+)$").expect("battletag regex is valid")
});

/// A validated battletag, split into its name and discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleTag {
    pub name: String,
    pub discriminator: String,
}

impl BattleTag {
    /// Parses `name#digits`. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// * `AppError::InvalidHandle` - missing `#`, empty name or no digits
    pub fn parse(handle: &str) -> Result<Self, AppError> {
        let trimmed = handle.trim();
        let captures = BATTLETAG_REGEX
            .captures(trimmed)
            .ok_or_else(|| AppError::invalid_handle(trimmed))?;

        Ok(BattleTag {
            name: captures[1].to_string(),
            discriminator: captures[2].to_string(),
        })
    }

    /// The identifier the lookup service expects, with `-` in place of `#`.
    pub fn lookup_id(&self) -> String {
        format!("{}-{}", self.name, self.discriminator)
    }
}

/// Looks up one player and merges profile and statistics into a [`PlayerSummary`].
///
/// The handle is validated before any request is made. Profile and stats are
/// requested concurrently; if either fails the whole lookup fails with
/// `AppError::PlayerLookup` naming the handle. Nothing is retried.
#[instrument(skip(client, config))]
pub async fn resolve_player(
    client: &Client,
    config: &Config,
    handle: &str,
) -> Result<PlayerSummary, AppError> {
    let battletag = BattleTag::parse(handle)?;
    let lookup_id = battletag.lookup_id();

    let (profile, stats) = tokio::try_join!(
        fetch_profile(client, config, &lookup_id),
        fetch_stats(client, config, &lookup_id),
    )
    .map_err(|e| {
        warn!("Lookup failed for {}: {}", handle.trim(), e);
        AppError::player_lookup(handle.trim(), &e)
    })?;

    let summary = merge_player(battletag, &config.lookup.platform, profile, stats);
    debug!(
        "Resolved {} (private: {}, rank: {:?})",
        summary.handle(),
        summary.is_private,
        summary.competitive_rank
    );
    Ok(summary)
}

/// Merges the two lookup responses.
///
/// A reported rank of 0 counts as unranked. Hero data is dropped for private
/// and unranked players and otherwise ordered by games played, descending.
fn merge_player(
    battletag: BattleTag,
    platform: &str,
    profile: ProfileResponse,
    stats: StatsResponse,
) -> PlayerSummary {
    let competitive_rank = profile.competitive.rank.filter(|rank| *rank > 0);

    let top_heroes = if profile.private || competitive_rank.is_none() {
        Vec::new()
    } else {
        let mut heroes: Vec<HeroPlaytime> = stats
            .top_heroes
            .competitive
            .played
            .into_iter()
            .map(|hero| HeroPlaytime {
                hero: hero.hero,
                games_played: hero.games_played,
            })
            .collect();
        heroes.sort_by(|a, b| b.games_played.cmp(&a.games_played));
        heroes
    };

    PlayerSummary {
        name: battletag.name,
        discriminator: battletag.discriminator,
        platform: platform.to_string(),
        is_private: profile.private,
        competitive_rank,
        top_heroes,
    }
}
