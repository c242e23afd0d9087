// src/storage/cache.rs

//! Time-bounded memoization of query results.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::models::{Match, Query};
use crate::utils::clock::Clock;

/// A cached query result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub matches: Vec<Match>,
    pub fetched_at: DateTime<Utc>,
}

/// In-memory cache keyed by the formatted query.
///
/// Stale entries are never purged, only ignored on read and overwritten by
/// the next `set`. The key space (sport x result type) is small.
pub struct QueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl QueryCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Cached matches for `query`, if fetched less than one TTL ago.
    ///
    /// An entry stamped later than the current clock reading is stale.
    pub fn get(&self, query: &Query) -> Option<Vec<Match>> {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&query.cache_key())
            .filter(|entry| now >= entry.fetched_at && now - entry.fetched_at < self.ttl)
            .map(|entry| entry.matches.clone())
    }

    /// Store matches for `query`, replacing whatever was there.
    pub fn set(&self, query: &Query, matches: Vec<Match>) {
        let entry = CacheEntry {
            matches,
            fetched_at: self.clock.now(),
        };
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(query.cache_key(), entry);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
