// src/parse/listing.rs

//! Broadcast listing parser.
//!
//! Reads list rows from the listing page using configured CSS selectors.
//! A row needs a title link and a note node; anything else is skipped.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;
use crate::parse::{DocumentKind, DocumentParser, ListingItem, RawCandidate};
use crate::utils::{normalize_whitespace, resolve_url};

/// `<day> <month-name> at <HH:MM>`, e.g. `17 October at 19:30`.
static KICKOFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s+([A-Za-z]+)\s+at\s+(\d{1,2}):(\d{2})").expect("static regex")
});

/// First parenthesized token, e.g. `(Football. Premier League)`.
static CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("static regex"));

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parser for the HTML broadcast listing.
pub struct ListingParser {
    row: Selector,
    title: Selector,
    note: Selector,
    logo: Option<Selector>,
    attr_name: String,
    base_url: Url,
}

impl ListingParser {
    /// Compile the selector table. `base_url` resolves relative links.
    pub fn new(selectors: &ListingSelectors, base_url: &str) -> Result<Self> {
        Ok(Self {
            row: parse_selector(&selectors.row_selector)?,
            title: parse_selector(&selectors.title_selector)?,
            note: parse_selector(&selectors.note_selector)?,
            logo: selectors
                .logo_selector
                .as_deref()
                .map(parse_selector)
                .transpose()?,
            attr_name: selectors.attr_name.clone(),
            base_url: Url::parse(base_url)?,
        })
    }

    fn parse_row(&self, index: usize, row: &ElementRef, now: DateTime<Utc>) -> Option<ListingItem> {
        let title_elem = row.select(&self.title).next()?;
        let note_elem = row.select(&self.note).next()?;

        let title = normalize_whitespace(&title_elem.text().collect::<String>());
        if title.is_empty() {
            return None;
        }
        let note = normalize_whitespace(&note_elem.text().collect::<String>());

        let link = title_elem
            .value()
            .attr(&self.attr_name)
            .map(|href| resolve_url(&self.base_url, href.trim()))
            .unwrap_or_default();

        let logo = self
            .logo
            .as_ref()
            .and_then(|sel| row.select(sel).next())
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);

        Some(ListingItem {
            index,
            title,
            link,
            category: category_token(&note),
            logo,
            date: kickoff(&note, now).unwrap_or(now),
            live: note.contains("Live"),
            note,
        })
    }
}

impl DocumentParser for ListingParser {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Listing
    }

    fn parse(&self, document: &str, now: DateTime<Utc>) -> Result<Vec<RawCandidate>> {
        let document = Html::parse_document(document);

        let items: Vec<_> = document
            .select(&self.row)
            .enumerate()
            .filter_map(|(index, row)| self.parse_row(index, &row, now))
            .map(RawCandidate::Listing)
            .collect();

        log::debug!("Listing yielded {} items", items.len());
        Ok(items)
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Text inside the first pair of parentheses, if not blank.
fn category_token(note: &str) -> Option<String> {
    CATEGORY
        .captures(note)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolve a month name by case-insensitive prefix (`Oct`, `october`).
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|month| month.starts_with(&name))
        .map(|i| i as u32 + 1)
}

/// Kickoff in local time of the current year.
fn kickoff(note: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = KICKOFF.captures(note)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let hour: u32 = caps[3].parse().ok()?;
    let minute: u32 = caps[4].parse().ok()?;

    let year = now.with_timezone(&Local).year();
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    const BASE: &str = "https://m.example.com/en/allupcoming/";

    const LISTING: &str = r#"
        <html><body>
        <ul class="nav"><li><a href="/">Home</a></li></ul>
        <ul class="broadcasts">
          <li>
            <img src="/img/sport/basketball.png">
            <a href="/webplayer.php?t=ifr&amp;c=12&amp;eid=345&amp;lid=6&amp;ci=3&amp;si=1">Los Angeles Lakers vs Boston Celtics</a>
            <span class="note">17 October at 19:30 (Basketball. NBA) Live</span>
          </li>
          <li>
            <a href="https://other.example.com/watch?c=9">Title Only</a>
          </li>
          <li>
            <img src="/img/sport/snooker.gif">
            <a href="/eventinfo/77">  Trump   -  Robertson </a>
            <span class="note">3 Dec at 14:00</span>
          </li>
          <li>
            <a href="/eventinfo/78">Mystery Event</a>
            <span class="note">Smarch 40 at 99:99</span>
          </li>
        </ul>
        </body></html>
    "#;

    fn parser() -> ListingParser {
        ListingParser::new(&ListingSelectors::default(), BASE).unwrap()
    }

    fn items(now: DateTime<Utc>) -> Vec<ListingItem> {
        parser()
            .parse(LISTING, now)
            .unwrap()
            .into_iter()
            .map(|c| match c {
                RawCandidate::Listing(item) => item,
                other => panic!("unexpected candidate {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_skips_rows_without_title_or_note() {
        let items = items(Utc::now());
        assert_eq!(items.len(), 3);
        // Row 0 is the nav item, row 2 lacks a note.
        let indexes: Vec<_> = items.iter().map(|i| i.index).collect();
        assert_eq!(indexes, vec![1, 3, 4]);
    }

    #[test]
    fn test_row_fields() {
        let now = Utc::now();
        let items = items(now);
        let first = &items[0];
        assert_eq!(first.title, "Los Angeles Lakers vs Boston Celtics");
        assert_eq!(
            first.link,
            "https://m.example.com/webplayer.php?t=ifr&c=12&eid=345&lid=6&ci=3&si=1"
        );
        assert_eq!(first.category.as_deref(), Some("Basketball. NBA"));
        assert_eq!(first.logo.as_deref(), Some("/img/sport/basketball.png"));
        assert!(first.live);

        let local = first.date.with_timezone(&Local);
        assert_eq!((local.month(), local.day()), (10, 17));
        assert_eq!((local.hour(), local.minute()), (19, 30));
        assert_eq!(local.year(), now.with_timezone(&Local).year());
    }

    #[test]
    fn test_month_prefix_and_defaults() {
        let now = Utc::now();
        let items = items(now);

        let snooker = &items[1];
        assert_eq!(snooker.title, "Trump - Robertson");
        assert!(!snooker.live);
        assert!(snooker.category.is_none());
        assert_eq!(snooker.date.with_timezone(&Local).month(), 12);

        // Unknown month falls back to the parse time.
        assert_eq!(items[2].date, now);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Oct"), Some(10));
        assert_eq!(month_number("SEPTEMBER"), Some(9));
        assert_eq!(month_number("Smarch"), None);
    }

    #[test]
    fn test_empty_document() {
        assert!(parser().parse("<html><body></body></html>", Utc::now()).unwrap().is_empty());
        assert!(parser().parse("", Utc::now()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        let selectors = ListingSelectors {
            row_selector: "[[invalid".to_string(),
            ..ListingSelectors::default()
        };
        assert!(ListingParser::new(&selectors, BASE).is_err());
    }
}
