//! Error types for locale lookup and formatting

use std::fmt;
use thiserror::Error;

/// Which name table an index was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTable {
    /// Month names or abbreviations, indexed 1-12
    Month,
    /// Day names or abbreviations, indexed 1 (Monday) to 7 (Sunday)
    Day,
}

impl fmt::Display for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// Errors that can occur during locale lookup and formatting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No registered locale declares the requested alias
    #[error("Unsupported locale '{name}'")]
    UnsupportedLocale { name: String },

    /// A timeframe name outside the fixed category set
    #[error("Invalid timeframe category: {0}")]
    InvalidTimeframe(String),

    /// A month or day index outside the table bounds
    #[error("{kind} index {index} out of range (expected 1..={max})")]
    IndexOutOfRange {
        kind: NameTable,
        index: u32,
        max: u32,
    },

    /// Two locale definitions declare the same alias
    #[error("Alias '{alias}' is declared by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: &'static str,
        second: &'static str,
    },

    /// A locale definition is internally inconsistent
    #[error("Invalid locale definition {locale}: {reason}")]
    InvalidDefinition {
        locale: &'static str,
        reason: String,
    },

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),
}

/// Result type for locale operations
pub type LocaleResult<T> = Result<T, LocaleError>;
