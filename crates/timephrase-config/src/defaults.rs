//! Default values for configuration types.

use crate::schema::{Config, LocaleConfig};
use timephrase_common::LocaleName;

/// Locale used when no configuration is supplied.
pub const DEFAULT_LOCALE: &str = "en_us";

/// Fallback used when no configuration is supplied.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: LocaleName::new(DEFAULT_LOCALE),
            fallback_locale: Some(LocaleName::new(DEFAULT_FALLBACK_LOCALE)),
        }
    }
}
