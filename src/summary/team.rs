use futures::future::join_all;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::models::{PlayerSummary, ResolutionError, TeamSummary};
use super::partition::{Side, compare_by_skill_rating, partition};
use super::player::resolve_player;
use super::tier::Tier;
use crate::config::Config;
use crate::data_fetcher::{RosterPage, extract_roster_handles, fetch_roster_page};
use crate::error::AppError;

/// Summarizes a TESPA team page.
///
/// Fails without a partial result when the URL is not a team page, the page
/// cannot be fetched, or no roster entries can be found on it. Individual
/// players that cannot be resolved end up in [`TeamSummary::errors`].
#[instrument(skip(client, config))]
pub async fn summarize_team(
    client: &Client,
    config: &Config,
    roster_page_url: &str,
) -> Result<TeamSummary, AppError> {
    let page = RosterPage::parse(roster_page_url)?;
    let body = fetch_roster_page(client, config, &page).await?;

    let handles = extract_roster_handles(&body)?;
    if handles.is_empty() {
        warn!("No roster entries found on {}", roster_page_url.trim());
        return Err(AppError::roster_structure(roster_page_url.trim()));
    }

    info!(
        "Resolving {} players of team {} (tournament {})",
        handles.len(),
        page.team_id,
        page.tournament_id
    );

    // Every lookup is created before any is awaited; join_all yields in roster order
    let lookups = handles.iter().map(|handle| async move {
        resolve_player(client, config, handle)
            .await
            .map_err(|e| ResolutionError::new(handle.as_str(), &e))
    });
    let results = join_all(lookups).await;

    let summary = build_team_summary(results);
    info!(
        "Team summary: {} players, {} resolved, {} failed, {} ranked",
        summary.total_players,
        summary.player_summaries.len(),
        summary.errors.len(),
        summary.ranked_players
    );
    Ok(summary)
}

/// Builds the team summary from per-player results given in roster order.
pub fn build_team_summary(
    results: Vec<Result<PlayerSummary, ResolutionError>>,
) -> TeamSummary {
    let total_players = results.len();
    let (mut player_summaries, errors) = partition(results, Side::from);

    let public_players = player_summaries.iter().filter(|p| !p.is_private).count();
    let ranked_ratings: Vec<u32> = player_summaries
        .iter()
        .filter(|p| !p.is_private)
        .filter_map(|p| p.competitive_rank)
        .collect();
    let ranked_players = ranked_ratings.len();

    let average_skill_rating = average_rating(&ranked_ratings);
    let average_skill_rating_tier = average_skill_rating.map(Tier::classify);

    player_summaries.sort_by(compare_by_skill_rating);

    TeamSummary {
        total_players,
        public_players,
        ranked_players,
        average_skill_rating,
        average_skill_rating_tier,
        player_summaries,
        errors,
    }
}

/// Mean of `ratings` rounded half up, `None` for an empty slice.
fn average_rating(ratings: &[u32]) -> Option<u32> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    let count = ratings.len() as u64;
    let rounded = (2 * sum + count) / (2 * count);
    u32::try_from(rounded).ok()
}
