//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Upstream endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Listing page selectors
    #[serde(default)]
    pub listing: ListingSelectors,

    /// Query cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.fetcher.attempt_timeout_secs == 0 {
            return Err(AppError::validation(
                "fetcher.attempt_timeout_secs must be > 0",
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(AppError::validation("cache.ttl_secs must be > 0"));
        }
        if self.cache.try_ttl().is_none() {
            return Err(AppError::validation(format!(
                "cache.ttl_secs {} is out of range",
                self.cache.ttl_secs
            )));
        }

        for (name, value) in [
            ("endpoints.listing_url", &self.endpoints.listing_url),
            ("endpoints.feed_url", &self.endpoints.feed_url),
            ("endpoints.relay_url", &self.endpoints.relay_url),
            ("endpoints.player_url", &self.endpoints.player_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| AppError::validation(format!("{name} is not a URL: {e}")))?;
        }

        for (name, selector) in self.listing.all() {
            Selector::parse(selector)
                .map_err(|e| AppError::selector(selector, format!("{name}: {e:?}")))?;
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Upper bound for one fallback attempt (fetch + body) in seconds
    #[serde(default = "defaults::attempt_timeout")]
    pub attempt_timeout_secs: u64,
}

impl FetcherConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            attempt_timeout_secs: defaults::attempt_timeout(),
        }
    }
}

/// Upstream endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Broadcast listing page (HTML)
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// Syndication feed (XML)
    #[serde(default = "defaults::feed_url")]
    pub feed_url: String,

    /// Relay prefix; the percent-encoded target URL is appended
    #[serde(default = "defaults::relay_url")]
    pub relay_url: String,

    /// Web player endpoint used to build embed URLs
    #[serde(default = "defaults::player_url")]
    pub player_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            listing_url: defaults::listing_url(),
            feed_url: defaults::feed_url(),
            relay_url: defaults::relay_url(),
            player_url: defaults::player_url(),
        }
    }
}

/// Query cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a cached query result in seconds
    #[serde(default = "defaults::ttl")]
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// Configured TTL, or `None` when it does not fit a `chrono::Duration`.
    pub fn try_ttl(&self) -> Option<chrono::Duration> {
        i64::try_from(self.ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
    }

    /// Configured TTL, falling back to the default when out of range.
    pub fn ttl(&self) -> chrono::Duration {
        self.try_ttl().unwrap_or_else(|| {
            log::warn!(
                "cache.ttl_secs {} is out of range, using {}s",
                self.ttl_secs,
                defaults::ttl()
            );
            chrono::Duration::seconds(defaults::ttl() as i64)
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::ttl(),
        }
    }
}

mod defaults {
    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; sportfeed/0.1)".into()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn attempt_timeout() -> u64 {
        20
    }

    // Endpoint defaults
    pub fn listing_url() -> String {
        "https://m.livetv.sx/en/allupcoming/".into()
    }
    pub fn feed_url() -> String {
        "https://livetv.sx/export/upcoming_en.xml".into()
    }
    pub fn relay_url() -> String {
        "https://api.allorigins.win/raw?url=".into()
    }
    pub fn player_url() -> String {
        "https://cdn.livetv.sx/webplayer.php".into()
    }

    // Cache defaults
    pub fn ttl() -> u64 {
        300
    }
}
