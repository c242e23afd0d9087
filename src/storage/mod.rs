//! Storage for fetched results.
//!
//! Results only live in memory: a per-query cache with time-based expiry.
//! Nothing is written to disk.

pub mod cache;

// Re-export for convenience
pub use cache::{CacheEntry, QueryCache};
