//! Team page addressing and the roster table query.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::constants::ROSTER_HANDLE_SELECTOR;
use crate::error::AppError;

static ROSTER_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://compete\.tespa\.org/tournament/([0-9]+)/team/([0-9]+)/?$")
        .expect("roster URL regex is valid")
});

/// A validated team page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterPage {
    pub tournament_id: u64,
    pub team_id: u64,
}

impl RosterPage {
    /// Parses a team page URL of the form
    /// `https://compete.tespa.org/tournament/<id>/team/<id>` (optional trailing slash).
    ///
    /// # Errors
    /// * `AppError::InvalidRosterUrl` - for any other host, path or non-numeric id
    pub fn parse(url: &str) -> Result<Self, AppError> {
        let trimmed = url.trim();
        let captures = ROSTER_URL_REGEX
            .captures(trimmed)
            .ok_or_else(|| AppError::invalid_roster_url(trimmed))?;

        let tournament_id = captures[1]
            .parse::<u64>()
            .map_err(|_| AppError::invalid_roster_url(trimmed))?;
        let team_id = captures[2]
            .parse::<u64>()
            .map_err(|_| AppError::invalid_roster_url(trimmed))?;

        Ok(RosterPage {
            tournament_id,
            team_id,
        })
    }
}

/// Returns the trimmed text of every element matching `selector`, in document order.
/// An empty vector means nothing matched.
pub fn select_texts(body: &str, selector: &str) -> Result<Vec<String>, AppError> {
    let parsed = Selector::parse(selector)
        .map_err(|e| AppError::invalid_selector(selector, e.to_string()))?;
    let document = Html::parse_document(body);

    Ok(document
        .select(&parsed)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect())
}

/// Extracts the battletags listed in a team page's roster table.
pub fn extract_roster_handles(body: &str) -> Result<Vec<String>, AppError> {
    let handles = select_texts(body, ROSTER_HANDLE_SELECTOR)?;
    debug!("Extracted {} roster entries", handles.len());
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_HTML: &str = r#"
        <html><body>
          <table class="compete-table">
            <thead><tr><th>#</th><th>Name</th><th>BattleTag</th></tr></thead>
            <tbody>
              <tr><td>1</td><td>Alice</td><td> alice#1234 </td></tr>
              <tr><td>2</td><td>Bob</td><td><span>bob#42</span></td></tr>
              <tr><td>3</td><td>Carol</td><td>carol#7</td></tr>
            </tbody>
          </table>
          <table class="other-table">
            <tr><td>x</td><td>y</td><td>not#1</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_valid_roster_urls() {
        let page = RosterPage::parse("https://compete.tespa.org/tournament/111/team/4242").unwrap();
        assert_eq!(
            page,
            RosterPage {
                tournament_id: 111,
                team_id: 4242
            }
        );

        let page = RosterPage::parse(" https://compete.tespa.org/tournament/5/team/6/ ").unwrap();
        assert_eq!(page.tournament_id, 5);
        assert_eq!(page.team_id, 6);
    }

    #[test]
    fn test_parse_rejects_other_urls() {
        let bad = [
            "",
            "compete.tespa.org/tournament/1/team/2",
            "http://compete.tespa.org/tournament/1/team/2",
            "https://evil.example.com/tournament/1/team/2",
            "https://compete.tespa.org.evil.com/tournament/1/team/2",
            "https://compete.tespa.org/tournament/abc/team/2",
            "https://compete.tespa.org/tournament/1/team/",
            "https://compete.tespa.org/tournament/1/team/2/roster",
            "https://compete.tespa.org/tournament/99999999999999999999999/team/2",
        ];
        for url in bad {
            let err = RosterPage::parse(url).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidRosterUrl { .. }),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_extract_roster_handles_in_order() {
        let handles = extract_roster_handles(ROSTER_HTML).unwrap();
        assert_eq!(handles, vec!["alice#1234", "bob#42", "carol#7"]);
    }

    #[test]
    fn test_extract_roster_handles_without_table() {
        let handles = extract_roster_handles("<html><body><p>Team not found</p></body></html>").unwrap();
        assert!(handles.is_empty());
    }

    #[test]
    fn test_select_texts_invalid_selector() {
        let err = select_texts("<p></p>", "td:::").unwrap_err();
        assert!(matches!(err, AppError::InvalidSelector { .. }));
    }
}
