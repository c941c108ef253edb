//! Wire models of the stats lookup service. Only the consumed fields are modeled.

use serde::{Deserialize, Serialize};

/// Response of the profile lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub competitive: CompetitiveRank,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitiveRank {
    /// Current season skill rating, `null` or missing when unranked.
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Response of the statistics lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsResponse {
    #[serde(default)]
    pub top_heroes: TopHeroes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopHeroes {
    #[serde(default)]
    pub competitive: HeroList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroList {
    #[serde(default)]
    pub played: Vec<HeroPlayed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroPlayed {
    pub hero: String,
    #[serde(default)]
    pub games_played: u32,
}
