//! League extraction for feed items.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DEFAULT_LEAGUE;

/// Abbreviations recognized anywhere in the text, in priority order.
const LEAGUE_ABBREVIATIONS: &[&str] = &["NFL", "NBA", "MLB", "NHL", "FIFA", "ATP"];

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\(\[]\s*([^\)\]]+?)\s*[\)\]]").expect("static regex"));

/// Best-effort league name from free text.
///
/// Known abbreviations win, then the first parenthesized or bracketed token,
/// then [`DEFAULT_LEAGUE`].
pub fn extract_league(text: &str) -> String {
    if let Some(abbr) = LEAGUE_ABBREVIATIONS
        .iter()
        .find(|abbr| contains_word(text, abbr))
    {
        return abbr.to_string();
    }

    BRACKETED
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_LEAGUE.to_string())
}

/// Case-insensitive whole-word containment.
fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_priority() {
        assert_eq!(extract_league("NBA on NFL Sunday"), "NFL");
        assert_eq!(extract_league("Rangers vs Bruins - nhl"), "NHL");
        assert_eq!(extract_league("ATP 500 Basel (Tennis)"), "ATP");
    }

    #[test]
    fn test_abbreviation_must_be_whole_word() {
        assert_eq!(extract_league("Unbalanced contest"), DEFAULT_LEAGUE);
    }

    #[test]
    fn test_bracketed_token() {
        assert_eq!(extract_league("Arsenal vs Chelsea (Premier League)"), "Premier League");
        assert_eq!(extract_league("Final [ Euroleague ] tonight"), "Euroleague");
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(extract_league("Match Update"), "Live Event");
    }
}
