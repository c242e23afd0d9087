//! Deterministic matches served when every upstream source failed.

use chrono::{DateTime, Duration, Utc};

use crate::extract::{build_stream_url, slugify};
use crate::models::{Match, Sport, StreamParams, StreamSource, Team, Teams};

struct Fixture {
    away: &'static str,
    home: &'static str,
    category: Sport,
    league: &'static str,
    live: bool,
    /// Kickoff offset from now
    hours: i64,
    channel: &'static str,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        away: "Buffalo Bills",
        home: "Kansas City Chiefs",
        category: Sport::Football,
        league: "NFL",
        live: true,
        hours: 0,
        channel: "101",
    },
    Fixture {
        away: "Los Angeles Lakers",
        home: "Boston Celtics",
        category: Sport::Basketball,
        league: "NBA",
        live: false,
        hours: 2,
        channel: "102",
    },
    Fixture {
        away: "Manchester United",
        home: "Liverpool",
        category: Sport::Soccer,
        league: "Premier League",
        live: false,
        hours: 4,
        channel: "103",
    },
];

/// The fixed fallback set, dated relative to `now`.
///
/// Every match carries one source pointing at `player_url`.
pub fn static_matches(now: DateTime<Utc>, player_url: &str) -> Vec<Match> {
    FIXTURES
        .iter()
        .enumerate()
        .map(|(n, fixture)| {
            let id = format!("fallback-{}", n + 1);
            let title = format!("{} vs {}", fixture.away, fixture.home);
            let params = StreamParams {
                stream_type: "ifr".to_string(),
                channel_id: fixture.channel.to_string(),
                ..StreamParams::default()
            };
            let embed =
                build_stream_url(player_url, &params).unwrap_or_else(|_| player_url.to_string());

            Match {
                slug: slugify(&title),
                title,
                live: fixture.live,
                category: fixture.category,
                date: now + Duration::hours(fixture.hours),
                popular: true,
                league: fixture.league.to_string(),
                teams: Some(Teams {
                    home: Team::new(fixture.home),
                    away: Team::new(fixture.away),
                }),
                sources: vec![StreamSource {
                    id: format!("{id}-0"),
                    name: "Stream 1".to_string(),
                    embed,
                    stream_params: Some(params),
                }],
                id,
            }
        })
        .collect()
}
