//! Match acquisition pipeline.
//!
//! - `normalize`: raw candidates to [`Match`](crate::models::Match) values
//! - `filter`: query filtering and kickoff ordering
//! - `fallback`: the static set served when everything upstream failed
//! - `orchestrator`: the ordered source chain tying the stages together

pub mod fallback;
pub mod filter;
pub mod normalize;
pub mod orchestrator;

pub use fallback::static_matches;
pub use filter::filter_and_sort;
pub use normalize::Normalizer;
pub use orchestrator::{FetchOutcome, Orchestrator, SourceAttempt, SourceKind};
