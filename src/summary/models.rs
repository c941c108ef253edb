use std::fmt;

use super::tier::Tier;
use crate::constants::PROFILE_LINK_BASE;
use crate::error::AppError;

/// A hero and how many competitive games were played on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPlaytime {
    pub hero: String,
    pub games_played: u32,
}

/// One resolved roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// Name part of the battletag
    pub name: String,
    /// Digits after the `#`, as given
    pub discriminator: String,
    /// Platform the lookup ran against
    pub platform: String,
    pub is_private: bool,
    /// Current season skill rating, `None` when unranked
    pub competitive_rank: Option<u32>,
    /// Most played competitive heroes, descending by games played.
    /// Always empty for private or unranked players.
    pub top_heroes: Vec<HeroPlaytime>,
}

impl PlayerSummary {
    /// The battletag in `name#1234` form.
    pub fn handle(&self) -> String {
        format!("{}#{}", self.name, self.discriminator)
    }

    /// Tier of the player's rating, `None` when unranked.
    pub fn tier(&self) -> Option<Tier> {
        self.competitive_rank.map(Tier::classify)
    }

    /// Public career profile link.
    pub fn profile_url(&self) -> String {
        format!(
            "{PROFILE_LINK_BASE}/{}/{}-{}",
            self.platform, self.name, self.discriminator
        )
    }
}

/// A roster entry that could not be turned into a [`PlayerSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionError {
    /// The roster entry exactly as extracted from the team page
    pub handle: String,
    pub message: String,
}

impl ResolutionError {
    pub fn new(handle: impl Into<String>, error: &AppError) -> Self {
        ResolutionError {
            handle: handle.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Aggregate over one team page.
///
/// `total_players == player_summaries.len() + errors.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub total_players: usize,
    pub public_players: usize,
    pub ranked_players: usize,
    /// Rounded mean rating of the ranked players, `None` when nobody is ranked
    pub average_skill_rating: Option<u32>,
    pub average_skill_rating_tier: Option<Tier>,
    /// Resolved players, ranked ones first by descending rating
    pub player_summaries: Vec<PlayerSummary>,
    /// Failed roster entries in roster order
    pub errors: Vec<ResolutionError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(rank: Option<u32>) -> PlayerSummary {
        PlayerSummary {
            name: "Tracer".to_string(),
            discriminator: "0042".to_string(),
            platform: "pc".to_string(),
            is_private: false,
            competitive_rank: rank,
            top_heroes: vec![],
        }
    }

    #[test]
    fn test_handle_keeps_discriminator_digits() {
        assert_eq!(summary(None).handle(), "Tracer#0042");
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            summary(None).profile_url(),
            "https://playoverwatch.com/en-us/career/pc/Tracer-0042"
        );
    }

    #[test]
    fn test_tier_follows_rank() {
        assert_eq!(summary(Some(2750)).tier(), Some(Tier::Platinum));
        assert_eq!(summary(None).tier(), None);
    }

    #[test]
    fn test_resolution_error_displays_message() {
        let error = ResolutionError::new("bad", &AppError::invalid_handle("bad"));
        assert_eq!(error.handle, "bad");
        assert_eq!(error.to_string(), "Bad battletag: bad");
    }
}
