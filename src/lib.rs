// src/lib.rs

//! Sportfeed Library
//!
//! Collects upcoming and live sporting events from a broadcast listing page
//! and a syndication feed, normalizes them into [`models::Match`] records and
//! serves filtered, cached queries through [`services::MatchService`].

pub mod error;
pub mod extract;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_support;
