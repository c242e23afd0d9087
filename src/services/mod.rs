//! Service layer.
//!
//! - `MatchService`: cached match queries, stream URLs and sport discovery

mod matches;

pub use matches::MatchService;
