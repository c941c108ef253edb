//! URL building utilities for the team pages and the stats lookup service

/// Builds the team page URL for a tournament and team.
///
/// # Example
/// ```
/// use bb_summarizer::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://compete.tespa.org", 111, 4242);
/// assert_eq!(url, "https://compete.tespa.org/tournament/111/team/4242");
/// ```
pub fn build_roster_url(roster_domain: &str, tournament_id: u64, team_id: u64) -> String {
    format!(
        "{}/tournament/{tournament_id}/team/{team_id}",
        roster_domain.trim_end_matches('/')
    )
}

/// Builds the profile lookup URL for one player.
///
/// `player_id` is the lookup form of a battletag (`name-1234`).
///
/// # Example
/// ```
/// use bb_summarizer::data_fetcher::api::build_profile_url;
///
/// let url = build_profile_url("https://ow-api.com/v1/stats", "pc", "us", "name-1234");
/// assert_eq!(url, "https://ow-api.com/v1/stats/pc/us/name-1234/profile");
/// ```
pub fn build_profile_url(api_domain: &str, platform: &str, region: &str, player_id: &str) -> String {
    format!(
        "{}/{platform}/{region}/{player_id}/profile",
        api_domain.trim_end_matches('/')
    )
}

/// Builds the statistics lookup URL for one player.
///
/// # Example
/// ```
/// use bb_summarizer::data_fetcher::api::build_stats_url;
///
/// let url = build_stats_url("https://ow-api.com/v1/stats/", "pc", "us", "name-1234");
/// assert_eq!(url, "https://ow-api.com/v1/stats/pc/us/name-1234/stats");
/// ```
pub fn build_stats_url(api_domain: &str, platform: &str, region: &str, player_id: &str) -> String {
    format!(
        "{}/{platform}/{region}/{player_id}/stats",
        api_domain.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_roster_url_trims_trailing_slash() {
        assert_eq!(
            build_roster_url("http://127.0.0.1:4000/", 1, 2),
            "http://127.0.0.1:4000/tournament/1/team/2"
        );
    }

    #[test]
    fn test_lookup_urls_use_platform_and_region() {
        assert_eq!(
            build_profile_url("http://localhost", "psn", "eu", "x-1"),
            "http://localhost/psn/eu/x-1/profile"
        );
        assert_eq!(
            build_stats_url("http://localhost", "psn", "eu", "x-1"),
            "http://localhost/psn/eu/x-1/stats"
        );
    }
}
