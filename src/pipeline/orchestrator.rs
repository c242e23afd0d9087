// src/pipeline/orchestrator.rs

//! Fallback fetch orchestration.
//!
//! Upstream sources are tried in a fixed order, each at most once:
//!
//! 1. listing page, direct
//! 2. feed, direct
//! 3. listing page, through the relay
//! 4. feed, through the relay
//! 5. the static fallback set
//!
//! The first source whose filtered result is non-empty wins. Transport
//! failures, error statuses, timeouts and unreadable documents all move on to
//! the next source. The static set always answers, so a query never fails.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Config, ListingSelectors, Match, Query};
use crate::parse::{DocumentKind, DocumentParser, FeedParser, ListingParser};
use crate::pipeline::fallback::static_matches;
use crate::pipeline::filter::filter_and_sort;
use crate::pipeline::normalize::Normalizer;
use crate::utils::clock::Clock;
use crate::utils::http::Fetcher;
use crate::utils::url::{get_domain, relay_url};

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    ListingDirect,
    FeedDirect,
    ListingProxied,
    FeedProxied,
    StaticFallback,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::ListingDirect => "listing-direct",
            SourceKind::FeedDirect => "feed-direct",
            SourceKind::ListingProxied => "listing-proxied",
            SourceKind::FeedProxied => "feed-proxied",
            SourceKind::StaticFallback => "static-fallback",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceAttempt {
    /// Fetch `url` and read it as `document`.
    Upstream {
        source: SourceKind,
        document: DocumentKind,
        url: String,
    },
    /// Serve the static set.
    Static,
}

impl SourceAttempt {
    pub fn source(&self) -> SourceKind {
        match self {
            SourceAttempt::Upstream { source, .. } => *source,
            SourceAttempt::Static => SourceKind::StaticFallback,
        }
    }
}

/// Result of one orchestrated fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub source: SourceKind,
    pub matches: Vec<Match>,
}

/// Runs the fallback chain for a query.
pub struct Orchestrator {
    config: Arc<Config>,
    fetcher: Arc<dyn Fetcher>,
    clock: Arc<dyn Clock>,
    listing: ListingParser,
    feed: FeedParser,
    normalizer: Normalizer,
}

impl Orchestrator {
    /// Build the parsers from `config`.
    ///
    /// A selector table that does not compile is replaced by the default one.
    pub fn new(config: Arc<Config>, fetcher: Arc<dyn Fetcher>, clock: Arc<dyn Clock>) -> Result<Self> {
        let base = &config.endpoints.listing_url;
        let listing = match ListingParser::new(&config.listing, base) {
            Ok(parser) => parser,
            Err(e @ AppError::Selector { .. }) => {
                log::warn!("Listing selectors rejected ({e}), using defaults");
                ListingParser::new(&ListingSelectors::default(), base)?
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            normalizer: Normalizer::new(config.endpoints.player_url.clone()),
            listing,
            feed: FeedParser::new(),
            config,
            fetcher,
            clock,
        })
    }

    /// The fallback chain, in order.
    pub fn attempts(&self) -> Vec<SourceAttempt> {
        let endpoints = &self.config.endpoints;
        let upstream = |source, document, url: String| SourceAttempt::Upstream {
            source,
            document,
            url,
        };

        vec![
            upstream(
                SourceKind::ListingDirect,
                DocumentKind::Listing,
                endpoints.listing_url.clone(),
            ),
            upstream(
                SourceKind::FeedDirect,
                DocumentKind::Feed,
                endpoints.feed_url.clone(),
            ),
            upstream(
                SourceKind::ListingProxied,
                DocumentKind::Listing,
                relay_url(&endpoints.relay_url, &endpoints.listing_url),
            ),
            upstream(
                SourceKind::FeedProxied,
                DocumentKind::Feed,
                relay_url(&endpoints.relay_url, &endpoints.feed_url),
            ),
            SourceAttempt::Static,
        ]
    }

    /// Run the chain for `query`. Never fails.
    pub async fn fetch(&self, query: &Query) -> FetchOutcome {
        let now = self.clock.now();

        for attempt in self.attempts() {
            let source = attempt.source();
            let SourceAttempt::Upstream { document, url, .. } = attempt else {
                break;
            };

            match self.try_upstream(document, &url, query, now).await {
                Ok(matches) if !matches.is_empty() => {
                    log::info!("{query}: {} matches from {source}", matches.len());
                    return FetchOutcome { source, matches };
                }
                Ok(_) => log::info!("{query}: nothing from {source}, moving on"),
                Err(e) if e.is_upstream() => log::info!("{query}: {source} failed: {e}"),
                Err(e) => log::warn!("{query}: {source} failed: {e}"),
            }
        }

        let matches = filter_and_sort(
            &static_matches(now, &self.config.endpoints.player_url),
            query,
            now,
        );
        log::warn!("{query}: all upstream sources failed, serving static fallback");
        FetchOutcome {
            source: SourceKind::StaticFallback,
            matches,
        }
    }

    async fn try_upstream(
        &self,
        document: DocumentKind,
        url: &str,
        query: &Query,
        now: DateTime<Utc>,
    ) -> Result<Vec<Match>> {
        let timeout = self.config.fetcher.attempt_timeout();
        let body = tokio::time::timeout(timeout, self.fetcher.fetch_text(url))
            .await
            .map_err(|_| AppError::fetch(url, format!("timed out after {timeout:?}")))??;

        log::debug!(
            "Fetched {} bytes of {document} from {}",
            body.len(),
            get_domain(url).unwrap_or_else(|| url.to_string())
        );

        let parser: &dyn DocumentParser = match document {
            DocumentKind::Listing => &self.listing,
            DocumentKind::Feed => &self.feed,
        };
        let candidates = parser.parse(&body, now)?;
        let matches = self.normalizer.normalize_all(candidates, now);
        Ok(filter_and_sort(&matches, query, now))
    }
}
