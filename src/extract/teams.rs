//! Team pair extraction from match titles.

use crate::models::{Team, Teams};

/// Separators between the two sides, in priority order.
const SEPARATORS: &[&str] = &[" vs ", " v ", " @ ", " - "];

/// Split a title into away and home teams.
///
/// The text before the first matching separator is the away side, the text
/// after it the home side. Returns `None` when no separator is present or
/// either side is blank.
pub fn extract_teams(title: &str) -> Option<Teams> {
    let (away, home) = SEPARATORS
        .iter()
        .find_map(|sep| title.split_once(sep))?;

    let (away, home) = (away.trim(), home.trim());
    if away.is_empty() || home.is_empty() {
        return None;
    }

    Some(Teams {
        home: Team::new(home),
        away: Team::new(away),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_BADGE;

    #[test]
    fn test_vs_separator() {
        let teams = extract_teams("Buffalo Bills vs Kansas City Chiefs").unwrap();
        assert_eq!(teams.away.name, "Buffalo Bills");
        assert_eq!(teams.home.name, "Kansas City Chiefs");
        assert_eq!(teams.home.badge, PLACEHOLDER_BADGE);
    }

    #[test]
    fn test_no_separator() {
        assert!(extract_teams("Match Update").is_none());
    }

    #[test]
    fn test_separator_priority() {
        // " vs " beats " - " even though the dash comes first.
        let teams = extract_teams("Cup - Lakers vs Celtics").unwrap();
        assert_eq!(teams.away.name, "Cup - Lakers");
        assert_eq!(teams.home.name, "Celtics");
    }

    #[test]
    fn test_other_separators() {
        let teams = extract_teams("Rangers @ Bruins").unwrap();
        assert_eq!((teams.away.name.as_str(), teams.home.name.as_str()), ("Rangers", "Bruins"));

        let teams = extract_teams("Arsenal v Chelsea").unwrap();
        assert_eq!(teams.home.name, "Chelsea");

        let teams = extract_teams("Alcaraz - Sinner").unwrap();
        assert_eq!(teams.away.name, "Alcaraz");
    }

    #[test]
    fn test_blank_side() {
        assert!(extract_teams("   vs Celtics").is_none());
    }
}
