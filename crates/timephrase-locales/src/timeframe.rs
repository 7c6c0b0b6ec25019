//! Timeframe categories

use crate::error::LocaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit of elapsed time a phrase describes
///
/// Singular categories (`Minute`, `Hour`, ...) describe exactly one unit and
/// usually carry no number; the plural ones receive the delta's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Now,
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Timeframe {
    /// Every category, in declaration order
    pub const ALL: [Self; 12] = [
        Self::Now,
        Self::Seconds,
        Self::Minute,
        Self::Minutes,
        Self::Hour,
        Self::Hours,
        Self::Day,
        Self::Days,
        Self::Month,
        Self::Months,
        Self::Year,
        Self::Years,
    ];

    /// Get the canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Seconds => "seconds",
            Self::Minute => "minute",
            Self::Minutes => "minutes",
            Self::Hour => "hour",
            Self::Hours => "hours",
            Self::Day => "day",
            Self::Days => "days",
            Self::Month => "month",
            Self::Months => "months",
            Self::Year => "year",
            Self::Years => "years",
        }
    }

    /// Whether the phrase for this category is wrapped in a past/future template
    pub fn is_relative(&self) -> bool {
        !matches!(self, Self::Now)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|timeframe| timeframe.as_str() == s)
            .ok_or_else(|| LocaleError::InvalidTimeframe(s.to_string()))
    }
}
