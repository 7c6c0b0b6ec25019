//! Test utilities and shared test helpers for Timephrase.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

#[cfg(feature = "tracing-subscriber")]
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
#[cfg(feature = "tracing-subscriber")]
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Fixtures for grammatical number agreement.
pub mod plural_fixtures {
    /// Counts paired with the expected three-way form index (one, few, many)
    /// under the Slavic agreement rule.
    pub fn slavic_cases() -> Vec<(u64, usize)> {
        vec![
            (0, 2),
            (1, 0),
            (2, 1),
            (4, 1),
            (5, 2),
            (11, 2),
            (12, 2),
            (14, 2),
            (19, 2),
            (20, 2),
            (21, 0),
            (22, 1),
            (25, 2),
            (101, 0),
            (111, 2),
            (112, 2),
            (122, 1),
            (1001, 0),
        ]
    }

    /// Placeholder templates that make the selected form visible in output.
    pub fn marker_templates() -> [&'static str; 3] {
        ["{0} day-one", "{0} day-few", "{0} day-many"]
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[locale]
default_locale = "ru"
"#
    }

    /// A full configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "locale:\n",
            "  default_locale: \"uk_UA\"\n",
            "  fallback_locale: \"en\"\n",
        )
    }

    /// A full configuration as JSON.
    pub fn full_config_json() -> &'static str {
        r#"{ "locale": { "default_locale": "sv_SE", "fallback_locale": "en_us" } }"#
    }

    /// A configuration naming a locale that is not registered.
    pub fn unsupported_locale_toml() -> &'static str {
        r#"
[locale]
default_locale = "tlh"
fallback_locale = "en"
"#
    }
}
