//! Query filtering and ordering.

use chrono::{DateTime, Local, Utc};

use crate::models::{Match, Query, ResultType};

/// Whether `m` was (or will be) played on the local calendar day of `now`.
pub fn is_today(m: &Match, now: DateTime<Utc>) -> bool {
    m.date.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
}

/// Whether `m` satisfies `query`.
pub fn matches_query(m: &Match, query: &Query, now: DateTime<Utc>) -> bool {
    if query.sport.is_some_and(|sport| m.category != sport) {
        return false;
    }
    match query.result_type {
        ResultType::All => true,
        ResultType::Live => m.live,
        ResultType::Today => is_today(m, now),
        ResultType::TopToday => m.popular && is_today(m, now),
    }
}

/// Keep the matches that satisfy `query`, ordered by kickoff ascending.
///
/// The sort is stable, so matches sharing a kickoff keep their input order.
pub fn filter_and_sort(matches: &[Match], query: &Query, now: DateTime<Utc>) -> Vec<Match> {
    let mut kept: Vec<Match> = matches
        .iter()
        .filter(|m| matches_query(m, query, now))
        .cloned()
        .collect();
    kept.sort_by_key(|m| m.date);
    kept
}
