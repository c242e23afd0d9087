//! Match and stream source data structures.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Sport;

/// League label used when nothing better could be extracted.
pub const DEFAULT_LEAGUE: &str = "Live Event";

/// Badge reference attached to every extracted team.
pub const PLACEHOLDER_BADGE: &str = "/images/team-placeholder.svg";

/// A normalized sporting event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Source-scoped identifier (`mobile-3`, `rss-0`, ...)
    pub id: String,

    /// URL-safe form of the title
    pub slug: String,

    pub title: String,

    pub live: bool,

    pub category: Sport,

    /// Kickoff, possibly approximate
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,

    /// Category is in the marquee set of the path that produced it
    pub popular: bool,

    pub league: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Teams>,

    pub sources: Vec<StreamSource>,
}

impl Match {
    /// Format the match for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{slug}`, `{title}`, `{league}`, `{category}`
    /// - `{date}` (local time), `{live}` (`LIVE` or empty), `{sources}` (count)
    pub fn format(&self, template: &str) -> String {
        let date = self
            .date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        template
            .replace("{id}", &self.id)
            .replace("{slug}", &self.slug)
            .replace("{title}", &self.title)
            .replace("{league}", &self.league)
            .replace("{category}", self.category.as_str())
            .replace("{date}", &date)
            .replace("{live}", if self.live { "LIVE" } else { "" })
            .replace("{sources}", &self.sources.len().to_string())
    }
}

/// Home and away sides of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub badge: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            badge: PLACEHOLDER_BADGE.to_string(),
        }
    }
}

/// One playable endpoint of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamSource {
    pub id: String,

    /// Display label
    pub name: String,

    /// Ready-to-use player or page URL
    pub embed: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_params: Option<StreamParams>,
}

/// Parameters understood by the upstream web player.
///
/// Unknown keys are dropped on the way in; missing ones default to an empty
/// string, except `lang` which defaults to `en`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreamParams {
    #[serde(rename = "t")]
    pub stream_type: String,
    #[serde(rename = "c")]
    pub channel_id: String,
    #[serde(rename = "eid")]
    pub event_id: String,
    #[serde(rename = "lid")]
    pub link_id: String,
    pub lang: String,
    #[serde(rename = "ci")]
    pub category_id: String,
    #[serde(rename = "si")]
    pub source_index: String,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            stream_type: String::new(),
            channel_id: String::new(),
            event_id: String::new(),
            link_id: String::new(),
            lang: "en".to_string(),
            category_id: String::new(),
            source_index: String::new(),
        }
    }
}

impl StreamParams {
    /// Assign a value by its short query key. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "t" => &mut self.stream_type,
            "c" => &mut self.channel_id,
            "eid" => &mut self.event_id,
            "lid" => &mut self.link_id,
            "lang" => &mut self.lang,
            "ci" => &mut self.category_id,
            "si" => &mut self.source_index,
            _ => return,
        };
        if key == "lang" && value.is_empty() {
            return;
        }
        *slot = value.to_string();
    }

    /// Key/value pairs in player query order.
    pub fn pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("t", self.stream_type.as_str()),
            ("c", self.channel_id.as_str()),
            ("eid", self.event_id.as_str()),
            ("lid", self.link_id.as_str()),
            ("lang", self.lang.as_str()),
            ("ci", self.category_id.as_str()),
            ("si", self.source_index.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Playable URL handed to the player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamData {
    pub stream_url: String,
}
