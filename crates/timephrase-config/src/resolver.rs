//! Resolution of the configured locale with fallback.

use crate::cache::ConfigCache;
use crate::schema::Config;
use timephrase_common::{Result, TimephraseError};
use timephrase_locales::{get_locale, Locale, LocaleError};
use tracing::{debug, warn};

/// Resolves the configured locale into a ready-to-use [`Locale`].
pub struct LocaleResolver;

impl LocaleResolver {
    /// Resolves the default locale, falling back to the fallback locale.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Locale`] carrying the default locale's lookup
    /// error if neither name resolves.
    pub fn resolve(config: &Config) -> Result<Locale> {
        let default = &config.locale.default_locale;

        match get_locale(default.as_str()) {
            Ok(locale) => {
                debug!("Resolved locale {} to {}", default, locale.name());
                Ok(locale)
            }
            Err(err) => {
                let Some(fallback) = &config.locale.fallback_locale else {
                    return Err(locale_error(err));
                };

                warn!(
                    "Locale {} could not be resolved ({}), falling back to {}",
                    default, err, fallback
                );
                get_locale(fallback.as_str()).map_err(|_| locale_error(err))
            }
        }
    }

    /// Resolves the locale from the cache's current configuration.
    ///
    /// # Errors
    ///
    /// See [`LocaleResolver::resolve`].
    pub fn resolve_cached(cache: &ConfigCache) -> Result<Locale> {
        Self::resolve(&cache.get())
    }
}

fn locale_error(err: LocaleError) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(TimephraseError::Locale(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use timephrase_common::LocaleName;
    use timephrase_locales::Timeframe;

    fn config(default: &str, fallback: Option<&str>) -> Config {
        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new(default);
        config.locale.fallback_locale = fallback.map(LocaleName::new);
        config
    }

    #[test]
    fn test_resolves_default_locale() {
        let locale = LocaleResolver::resolve(&config("RU", None)).unwrap();
        assert_eq!(locale.describe(Timeframe::Days, -5), "5 дней назад");
    }

    #[test]
    fn test_falls_back_when_default_is_unknown() {
        let locale = LocaleResolver::resolve(&config("tlh", Some("sv"))).unwrap();
        assert_eq!(locale.name(), "Swedish");
    }

    #[test]
    fn test_reports_default_error_when_both_fail() {
        let err = LocaleResolver::resolve(&config("tlh", Some("qya"))).unwrap_err();
        match err.downcast_ref::<TimephraseError>() {
            Some(TimephraseError::Locale(message)) => assert_eq!(message, "Unsupported locale 'tlh'"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = LocaleResolver::resolve(&config("tlh", None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TimephraseError>(),
            Some(TimephraseError::Locale(_))
        ));
    }

    #[test]
    fn test_resolve_cached() {
        let cache = ConfigCache::default();
        assert_eq!(LocaleResolver::resolve_cached(&cache).unwrap().name(), "English");
    }
}
