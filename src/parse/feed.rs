// src/parse/feed.rs

//! Syndication feed parser.
//!
//! Reads `<item>` elements and their `title`, `description`, `pubDate` and
//! `link` children. Live status is time based: an item is live when its
//! publication time is within [`LIVE_WINDOW_HOURS`] of now, in either
//! direction.

use chrono::{DateTime, Duration, Utc};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{AppError, Result};
use crate::parse::{DocumentKind, DocumentParser, FeedItem, RawCandidate};

/// Half-width of the live window around now.
pub const LIVE_WINDOW_HOURS: i64 = 3;

/// Child element of `<item>` currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    PubDate,
    Link,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"description" => Some(Field::Description),
            b"pubDate" => Some(Field::PubDate),
            b"link" => Some(Field::Link),
            _ => None,
        }
    }
}

/// Text fields collected for one `<item>`.
#[derive(Debug, Default)]
struct ItemFields {
    title: String,
    description: String,
    pub_date: String,
    link: String,
}

impl ItemFields {
    fn push(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::PubDate => &mut self.pub_date,
            Field::Link => &mut self.link,
        };
        slot.push_str(text);
    }
}

/// Parser for the XML syndication feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    fn finish(index: usize, fields: ItemFields, now: DateTime<Utc>) -> FeedItem {
        let published = parse_pub_date(&fields.pub_date);
        FeedItem {
            index,
            title: fields.title.trim().to_string(),
            description: fields.description.trim().to_string(),
            link: fields.link.trim().to_string(),
            live: published.is_some_and(|at| is_live(at, now)),
            published,
        }
    }
}

impl DocumentParser for FeedParser {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Feed
    }

    fn parse(&self, document: &str, now: DateTime<Utc>) -> Result<Vec<RawCandidate>> {
        let mut reader = Reader::from_str(document);
        reader.config_mut().trim_text(true);

        let mut items = Vec::new();
        let mut current: Option<ItemFields> = None;
        let mut field: Option<Field> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    // Keep what was read before the document broke off.
                    if items.is_empty() {
                        return Err(AppError::parse(
                            "feed",
                            format!("at byte {}: {e}", reader.error_position()),
                        ));
                    }
                    log::debug!("Feed truncated after {} items: {}", items.len(), e);
                    break;
                }
            };

            match event {
                Event::Start(e) => {
                    let name = e.local_name();
                    if name.as_ref() == b"item" {
                        current = Some(ItemFields::default());
                        field = None;
                    } else if current.is_some() && field.is_none() {
                        field = Field::from_name(name.as_ref());
                    }
                }
                Event::End(e) => {
                    let name = e.local_name();
                    if name.as_ref() == b"item" {
                        if let Some(fields) = current.take() {
                            let index = items.len();
                            items.push(RawCandidate::Feed(Self::finish(index, fields, now)));
                        }
                        field = None;
                    } else if field.is_some() && Field::from_name(name.as_ref()) == field {
                        field = None;
                    }
                }
                Event::Text(text) => {
                    if let (Some(fields), Some(f)) = (current.as_mut(), field) {
                        let decoded = text
                            .unescape()
                            .map(|s| s.into_owned())
                            .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                        fields.push(f, &decoded);
                    }
                }
                Event::CData(data) => {
                    if let (Some(fields), Some(f)) = (current.as_mut(), field) {
                        fields.push(f, &String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        log::debug!("Feed yielded {} items", items.len());
        Ok(items)
    }
}

/// Parse an RFC 2822 `pubDate`, accepting RFC 3339 as well.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Whether `at` lies strictly inside the live window around `now`.
pub fn is_live(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - at).abs() < Duration::hours(LIVE_WINDOW_HOURS)
}
