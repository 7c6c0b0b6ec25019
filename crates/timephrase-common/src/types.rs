//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::normalize_locale_name;

/// A locale name as supplied by a caller or a configuration file.
///
/// The original spelling is preserved for error messages; use
/// [`LocaleName::normalized`] to obtain the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleName(pub String);

impl LocaleName {
    /// Creates a locale name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the registry key for this name.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_locale_name(&self.0)
    }
}

impl fmt::Display for LocaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocaleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LocaleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum TimephraseError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Locale resolution error.
    #[error("Locale error: {0}")]
    Locale(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
