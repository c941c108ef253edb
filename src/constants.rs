//! Application-wide constants and configuration defaults
//!
//! This module centralizes the magic numbers and fixed strings used by the
//! lookups, the roster scraper and the report formatter.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default base URL of the player stats lookup service
pub const DEFAULT_STATS_API_DOMAIN: &str = "https://ow-api.com/v1/stats";

/// Default base URL the team pages are fetched from
pub const DEFAULT_ROSTER_DOMAIN: &str = "https://compete.tespa.org";

/// Default lookup platform
pub const DEFAULT_PLATFORM: &str = "pc";

/// Default lookup region
pub const DEFAULT_REGION: &str = "us";

/// Replies are held back at least this long
pub const DEFAULT_MIN_REPLY_DELAY_MS: u64 = 2500;

/// Selector for the battletag column of the team page roster table
pub const ROSTER_HANDLE_SELECTOR: &str = ".compete-table td:nth-child(3)";

/// Base of the public career profile links
pub const PROFILE_LINK_BASE: &str = "https://playoverwatch.com/en-us/career";

/// Report formatting limits
pub mod report {
    /// Heroes listed for a single player lookup
    pub const PLAYER_HERO_LIMIT: usize = 5;

    /// Heroes listed per player inside a team summary
    pub const TEAM_HERO_LIMIT: usize = 3;

    /// Shown where an average rating cannot be computed
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Shown in place of a rating for players without one
    pub const UNRANKED: &str = "Unranked";
}

/// Environment variables that override the config file
pub mod env {
    pub const STATS_API_DOMAIN: &str = "BB_STATS_API_DOMAIN";
    pub const ROSTER_DOMAIN: &str = "BB_ROSTER_DOMAIN";
    pub const PLATFORM: &str = "BB_PLATFORM";
    pub const REGION: &str = "BB_REGION";
    pub const LOG_FILE: &str = "BB_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "BB_HTTP_TIMEOUT";
}
