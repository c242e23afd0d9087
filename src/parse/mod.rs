//! Document parsers.
//!
//! One parser per upstream document shape. Each turns a document string into
//! raw candidate records; turning those into [`Match`](crate::models::Match)
//! values is the normalizer's job.
//!
//! - `ListingParser`: HTML broadcast listing
//! - `FeedParser`: XML syndication feed

mod feed;
mod listing;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Result;

pub use feed::{FeedParser, LIVE_WINDOW_HOURS};
pub use listing::ListingParser;

/// Upstream document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Listing,
    Feed,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Listing => f.write_str("listing"),
            DocumentKind::Feed => f.write_str("feed"),
        }
    }
}

/// Anything that can turn a document into raw candidates.
pub trait DocumentParser {
    /// Which document shape this parser reads.
    fn kind(&self) -> DocumentKind;

    /// Parse `document`. A readable document without entries is `Ok(vec![])`.
    fn parse(&self, document: &str, now: DateTime<Utc>) -> Result<Vec<RawCandidate>>;
}

/// One entry read from an upstream document, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCandidate {
    Listing(ListingItem),
    Feed(FeedItem),
}

/// Entry from the HTML listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingItem {
    /// Position among all list rows, skipped ones included
    pub index: usize,
    pub title: String,
    /// Absolute stream link from the title anchor (empty if none)
    pub link: String,
    /// Raw metadata text
    pub note: String,
    /// Text inside the first parentheses of the note
    pub category: Option<String>,
    /// Logo image source
    pub logo: Option<String>,
    /// Kickoff from the note, or the parse time when it could not be read
    pub date: DateTime<Utc>,
    /// Note mentions "Live"
    pub live: bool,
}

/// Entry from the XML feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub link: String,
    /// Parsed `pubDate`, if it was readable
    pub published: Option<DateTime<Utc>>,
    /// `published` lies within the live window around the parse time
    pub live: bool,
}
