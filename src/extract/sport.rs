//! Sport classification from free text and logo filenames.

use crate::models::Sport;

/// Keywords mapped to a sport, checked in table order.
struct SportKeyword {
    keywords: &'static [&'static str],
    sport: Sport,
}

/// Primary table for category text, titles and descriptions.
const TEXT_KEYWORDS: &[SportKeyword] = &[
    SportKeyword { keywords: &["football", "nfl"], sport: Sport::Football },
    SportKeyword { keywords: &["basketball", "nba"], sport: Sport::Basketball },
    SportKeyword { keywords: &["soccer", "fifa"], sport: Sport::Soccer },
    SportKeyword { keywords: &["baseball", "mlb"], sport: Sport::Baseball },
    SportKeyword { keywords: &["tennis"], sport: Sport::Tennis },
    SportKeyword { keywords: &["hockey", "nhl"], sport: Sport::Hockey },
    SportKeyword { keywords: &["softball"], sport: Sport::Softball },
];

/// Secondary table for listing logo filenames.
const LOGO_KEYWORDS: &[SportKeyword] = &[
    SportKeyword { keywords: &["snooker"], sport: Sport::Snooker },
    SportKeyword { keywords: &["badminton"], sport: Sport::Badminton },
    SportKeyword { keywords: &["volleyball"], sport: Sport::Volleyball },
    SportKeyword { keywords: &["boxing"], sport: Sport::Boxing },
    SportKeyword { keywords: &["basketball"], sport: Sport::Basketball },
    SportKeyword { keywords: &["softball"], sport: Sport::Softball },
    SportKeyword { keywords: &["baseball"], sport: Sport::Baseball },
    SportKeyword { keywords: &["tennis"], sport: Sport::Tennis },
    SportKeyword { keywords: &["hockey"], sport: Sport::Hockey },
    SportKeyword { keywords: &["football"], sport: Sport::Football },
    SportKeyword { keywords: &["soccer"], sport: Sport::Soccer },
];

fn lookup(table: &[SportKeyword], text: &str) -> Sport {
    let text = text.to_lowercase();
    table
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| text.contains(k)))
        .map_or(Sport::Other, |entry| entry.sport)
}

/// Classify text into a sport. First table hit wins; no hit is `Other`.
pub fn classify(text: &str) -> Sport {
    lookup(TEXT_KEYWORDS, text)
}

/// Classify a logo image by the filename part of its path.
pub fn classify_logo(src: &str) -> Sport {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    let filename = path.rsplit('/').next().unwrap_or_default();
    lookup(LOGO_KEYWORDS, filename)
}
