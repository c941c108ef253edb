//! Roster aggregation: player lookups, tier classification and the team summary.

pub mod models;
pub mod partition;
pub mod player;
pub mod team;
pub mod tier;

pub use models::{HeroPlaytime, PlayerSummary, ResolutionError, TeamSummary};
pub use partition::{Side, compare_by_skill_rating, partition};
pub use player::{BattleTag, resolve_player};
pub use team::{build_team_summary, summarize_team};
pub use tier::Tier;
