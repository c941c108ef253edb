use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::{fetch_json, fetch_text};
use super::urls::{build_profile_url, build_roster_url, build_stats_url};
use crate::config::Config;
use crate::data_fetcher::models::{ProfileResponse, StatsResponse};
use crate::data_fetcher::roster::RosterPage;
use crate::error::AppError;

/// Fetches the HTML of a team page from the configured team page domain.
#[instrument(skip(client, config))]
pub async fn fetch_roster_page(
    client: &Client,
    config: &Config,
    page: &RosterPage,
) -> Result<String, AppError> {
    let url = build_roster_url(&config.roster_domain, page.tournament_id, page.team_id);
    let body = fetch_text(client, &url).await?;
    debug!("Fetched team page {} ({} bytes)", url, body.len());
    Ok(body)
}

/// Fetches the profile of one player (`name-1234` form) for the configured platform and region.
pub async fn fetch_profile(
    client: &Client,
    config: &Config,
    player_id: &str,
) -> Result<ProfileResponse, AppError> {
    let url = build_profile_url(
        &config.stats_api_domain,
        &config.lookup.platform,
        &config.lookup.region,
        player_id,
    );
    fetch_json(client, &url).await
}

/// Fetches the hero statistics of one player (`name-1234` form).
pub async fn fetch_stats(
    client: &Client,
    config: &Config,
    player_id: &str,
) -> Result<StatsResponse, AppError> {
    let url = build_stats_url(
        &config.stats_api_domain,
        &config.lookup.platform,
        &config.lookup.region,
        player_id,
    );
    fetch_json(client, &url).await
}
