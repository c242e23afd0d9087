//! Field extractors.
//!
//! Stateless heuristics that pull structured fields out of free text and
//! markup. Rules live in tables next to each function so they can be tested
//! without any network or document plumbing.

pub mod league;
pub mod slug;
pub mod sport;
pub mod stream;
pub mod teams;

pub use league::extract_league;
pub use slug::slugify;
pub use sport::{classify, classify_logo};
pub use stream::{PlayerLink, build_stream_url, params_from_url, player_links, stream_data};
pub use teams::extract_teams;
