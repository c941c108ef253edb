pub mod api;
pub mod models;
pub mod roster;

pub use api::{create_http_client_with_timeout, fetch_profile, fetch_roster_page, fetch_stats};
pub use models::{CompetitiveRank, HeroPlayed, ProfileResponse, StatsResponse};
pub use roster::{RosterPage, extract_roster_handles};
