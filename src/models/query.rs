// src/models/query.rs

//! Match queries and their cache keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Sport;

/// Which slice of the match list the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultType {
    #[default]
    All,
    Live,
    Today,
    TopToday,
}

impl ResultType {
    pub const ALL: [ResultType; 4] = [
        ResultType::All,
        ResultType::Live,
        ResultType::Today,
        ResultType::TopToday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::All => "all",
            ResultType::Live => "live",
            ResultType::Today => "today",
            ResultType::TopToday => "top-today",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ResultType::All),
            "live" => Ok(ResultType::Live),
            "today" => Ok(ResultType::Today),
            "top-today" | "top_today" | "toptoday" => Ok(ResultType::TopToday),
            other => Err(AppError::validation(format!("Unknown result type '{other}'"))),
        }
    }
}

/// A match query. `sport == None` means every sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Query {
    pub sport: Option<Sport>,
    pub result_type: ResultType,
}

impl Query {
    pub fn new(sport: Option<Sport>, result_type: ResultType) -> Self {
        Self { sport, result_type }
    }

    /// Cache slot for this query.
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sport = self.sport.map_or("All", |s| s.as_str());
        write!(f, "{}:{}", sport, self.result_type)
    }
}
