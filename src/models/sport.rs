// src/models/sport.rs

//! Sport categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sport category attached to every match.
///
/// The first seven variants are what the text classifier can produce. The
/// rest only come from listing logo filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Basketball,
    Soccer,
    Baseball,
    Tennis,
    Hockey,
    Softball,
    Snooker,
    Badminton,
    Volleyball,
    Boxing,
    Other,
}

impl Sport {
    /// Every category, in declaration order.
    pub const ALL: [Sport; 12] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Soccer,
        Sport::Baseball,
        Sport::Tennis,
        Sport::Hockey,
        Sport::Softball,
        Sport::Snooker,
        Sport::Badminton,
        Sport::Volleyball,
        Sport::Boxing,
        Sport::Other,
    ];

    /// Sports reported when nothing has been observed upstream.
    pub const DEFAULTS: [Sport; 6] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Soccer,
        Sport::Baseball,
        Sport::Tennis,
        Sport::Hockey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Soccer => "Soccer",
            Sport::Baseball => "Baseball",
            Sport::Tennis => "Tennis",
            Sport::Hockey => "Hockey",
            Sport::Softball => "Softball",
            Sport::Snooker => "Snooker",
            Sport::Badminton => "Badminton",
            Sport::Volleyball => "Volleyball",
            Sport::Boxing => "Boxing",
            Sport::Other => "Other",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::validation(format!("Unknown sport '{needle}'")))
    }
}
