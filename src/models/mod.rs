// src/models/mod.rs

//! Domain models for the match pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod matches;
mod query;
mod selectors;
mod sport;

// Re-export all public types
pub use config::{CacheConfig, Config, EndpointConfig, FetcherConfig};
pub use matches::{
    DEFAULT_LEAGUE, Match, PLACEHOLDER_BADGE, StreamData, StreamParams, StreamSource, Team, Teams,
};
pub use query::{Query, ResultType};
pub use selectors::ListingSelectors;
pub use sport::Sport;
