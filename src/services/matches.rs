// src/services/matches.rs

//! Match service.
//!
//! Public entry point of the crate: cached match queries, stream URL
//! construction and sport discovery.

use std::sync::Arc;

use crate::error::Result;
use crate::extract::stream_data;
use crate::models::{Config, Match, Query, ResultType, Sport, StreamData, StreamParams};
use crate::pipeline::Orchestrator;
use crate::storage::QueryCache;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::http::{Fetcher, HttpFetcher};

/// Service answering match queries from upstream sources through a cache.
pub struct MatchService {
    config: Arc<Config>,
    orchestrator: Orchestrator,
    cache: Arc<QueryCache>,
}

impl MatchService {
    /// Create a service from its parts.
    pub fn new(
        config: Arc<Config>,
        fetcher: Arc<dyn Fetcher>,
        cache: Arc<QueryCache>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let orchestrator = Orchestrator::new(Arc::clone(&config), fetcher, clock)?;
        Ok(Self {
            config,
            orchestrator,
            cache,
        })
    }

    /// Create a service backed by HTTP and the wall clock.
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let fetcher = Arc::new(HttpFetcher::from_config(&config.fetcher)?);
        let cache = Arc::new(QueryCache::new(config.cache.ttl(), Arc::clone(&clock)));
        Self::new(config, fetcher, cache, clock)
    }

    /// Matches for a sport (`None` for all) and result type.
    ///
    /// Fresh cached results are returned without touching the network.
    /// Never fails: when every upstream source fails the static set is used.
    pub async fn fetch_matches(&self, sport: Option<Sport>, result_type: ResultType) -> Vec<Match> {
        let query = Query::new(sport, result_type);
        if let Some(matches) = self.cache.get(&query) {
            log::debug!("{query}: cache hit ({} matches)", matches.len());
            return matches;
        }

        let outcome = self.orchestrator.fetch(&query).await;
        self.cache.set(&query, outcome.matches.clone());
        outcome.matches
    }

    /// Build the embeddable player URL for a stream.
    pub fn fetch_stream_data(&self, params: &StreamParams) -> Result<StreamData> {
        stream_data(&self.config.endpoints.player_url, params)
    }

    /// Distinct sports among all current matches, sorted by name.
    ///
    /// Falls back to [`Sport::DEFAULTS`] when no match is available.
    pub async fn fetch_sports(&self) -> Vec<Sport> {
        let matches = self.fetch_matches(None, ResultType::All).await;

        let mut sports: Vec<Sport> = matches.iter().map(|m| m.category).collect();
        sports.sort_by_key(|s| s.as_str());
        sports.dedup();

        if sports.is_empty() {
            return Sport::DEFAULTS.to_vec();
        }
        sports
    }

    /// Drop every cached query result.
    pub fn clear_cache(&self) {
        self.cache.clear();
        log::info!("Match cache cleared");
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}
