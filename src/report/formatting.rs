// src/report/formatting.rs - Chat message rendering for player and team summaries

use crate::constants::report::{NOT_AVAILABLE, TEAM_HERO_LIMIT, UNRANKED};
use crate::summary::{PlayerSummary, TeamSummary};

const PRIVATE_PLACEHOLDER: &str = "Private profile";
const NO_HEROES_PLACEHOLDER: &str = "No competitive heroes played";

/// Renders one player: a header with battletag and tier, the profile link,
/// then up to `hero_limit` heroes (or a placeholder when there are none).
///
/// Hero lines are indented with one tab.
pub fn format_player(summary: &PlayerSummary, hero_limit: usize) -> String {
    let mut message = String::with_capacity(128 + hero_limit * 32);

    let rating = match (summary.tier(), summary.competitive_rank) {
        (Some(tier), Some(rank)) => format!("{tier} ({rank})"),
        _ => UNRANKED.to_string(),
    };
    message.push_str(&format!("**{}** - {}\n", summary.handle(), rating));
    message.push_str(&format!("<{}>\n", summary.profile_url()));

    if summary.is_private {
        message.push_str(&format!("\t{PRIVATE_PLACEHOLDER}\n"));
    } else if summary.top_heroes.is_empty() {
        message.push_str(&format!("\t{NO_HEROES_PLACEHOLDER}\n"));
    } else {
        for hero in summary.top_heroes.iter().take(hero_limit) {
            message.push_str(&format!("\t{} ({})\n", hero.hero, hero.games_played));
        }
    }

    message
}

/// Renders a team: the average rating header, member counts, every resolved
/// player (indented, at most three heroes each) and finally the roster
/// entries that could not be resolved.
///
/// A team without ranked players shows `N/A` as its average.
pub fn format_team(summary: &TeamSummary) -> String {
    let mut message = String::new();

    let average = match (summary.average_skill_rating_tier, summary.average_skill_rating) {
        (Some(tier), Some(rating)) => format!("{tier} ({rating})"),
        _ => NOT_AVAILABLE.to_string(),
    };
    message.push_str(&format!("**Average Team SR**: {average}\n"));
    message.push_str(&format!(
        "**Team Members**: {} ({} public, {} ranked)\n",
        summary.total_players, summary.public_players, summary.ranked_players
    ));
    message.push_str("**Player Summaries** (current competitive season):\n");

    for player in &summary.player_summaries {
        for line in format_player(player, TEAM_HERO_LIMIT).lines() {
            message.push_str(&format!("\t{line}\n"));
        }
        message.push('\n');
    }

    if !summary.errors.is_empty() {
        message.push_str(&format!(
            "**Could not resolve** ({}):\n",
            summary.errors.len()
        ));
        for error in &summary.errors {
            message.push_str(&format!("\t{error}\n"));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::report::PLAYER_HERO_LIMIT;
    use crate::error::AppError;
    use crate::summary::{HeroPlaytime, ResolutionError, Tier};

    fn heroes(count: usize) -> Vec<HeroPlaytime> {
        (0..count)
            .map(|i| HeroPlaytime {
                hero: format!("Hero{i}"),
                games_played: (100 - i * 10) as u32,
            })
            .collect()
    }

    fn player(name: &str, private: bool, rank: Option<u32>, hero_count: usize) -> PlayerSummary {
        PlayerSummary {
            name: name.to_string(),
            discriminator: "1234".to_string(),
            platform: "pc".to_string(),
            is_private: private,
            competitive_rank: rank,
            top_heroes: heroes(hero_count),
        }
    }

    #[test]
    fn test_format_ranked_player() {
        let output = format_player(&player("Mercy", false, Some(2650), 2), PLAYER_HERO_LIMIT);
        assert_eq!(
            output,
            "**Mercy#1234** - Platinum (2650)\n\
             <https://playoverwatch.com/en-us/career/pc/Mercy-1234>\n\
             \tHero0 (100)\n\
             \tHero1 (90)\n"
        );
    }

    #[test]
    fn test_format_player_respects_hero_limit() {
        let output = format_player(&player("Mercy", false, Some(2650), 8), PLAYER_HERO_LIMIT);
        assert_eq!(output.matches("\tHero").count(), PLAYER_HERO_LIMIT);
        assert!(output.contains("Hero4 (60)"));
        assert!(!output.contains("Hero5"));
    }

    #[test]
    fn test_format_unranked_player() {
        let output = format_player(&player("Zen", false, None, 0), PLAYER_HERO_LIMIT);
        assert!(output.starts_with("**Zen#1234** - Unranked\n"));
        assert!(output.contains(NO_HEROES_PLACEHOLDER));
    }

    #[test]
    fn test_format_private_player() {
        let output = format_player(&player("Sombra", true, Some(3300), 0), PLAYER_HERO_LIMIT);
        assert!(output.starts_with("**Sombra#1234** - Diamond (3300)\n"));
        assert!(output.contains(PRIVATE_PLACEHOLDER));
        assert!(!output.contains(NO_HEROES_PLACEHOLDER));
    }

    #[test]
    fn test_format_team() {
        let summary = TeamSummary {
            total_players: 3,
            public_players: 2,
            ranked_players: 2,
            average_skill_rating: Some(2500),
            average_skill_rating_tier: Some(Tier::Platinum),
            player_summaries: vec![
                player("b", false, Some(3000), 5),
                player("a", false, Some(2000), 1),
            ],
            errors: vec![ResolutionError::new("bad", &AppError::invalid_handle("bad"))],
        };

        let output = format_team(&summary);

        assert!(output.starts_with(
            "**Average Team SR**: Platinum (2500)\n\
             **Team Members**: 3 (2 public, 2 ranked)\n\
             **Player Summaries** (current competitive season):\n"
        ));
        assert!(output.contains("\t**b#1234** - Diamond (3000)\n"));
        assert!(output.contains("\t\tHero2 (80)\n"));
        assert!(!output.contains("Hero3"));
        assert!(output.find("**b#1234**").unwrap() < output.find("**a#1234**").unwrap());
        assert!(output.ends_with("**Could not resolve** (1):\n\tBad battletag: bad\n"));
    }

    #[test]
    fn test_format_team_without_ranked_players() {
        let summary = TeamSummary {
            total_players: 2,
            public_players: 1,
            ranked_players: 0,
            average_skill_rating: None,
            average_skill_rating_tier: None,
            player_summaries: vec![
                player("a", false, None, 0),
                player("b", true, None, 0),
            ],
            errors: vec![],
        };

        let output = format_team(&summary);

        assert!(output.starts_with("**Average Team SR**: N/A\n"));
        assert!(!output.contains("NaN"));
        assert!(!output.contains("Could not resolve"));
        assert!(output.contains("\t**a#1234** - Unranked\n"));
        assert!(output.contains("\t\tPrivate profile\n"));
    }
}
