//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use arc_swap::ArcSwap;
use std::sync::Arc;
use timephrase_common::Result;
use tracing::debug;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Validates and stores a new configuration atomically.
    ///
    /// The previous configuration stays in place if validation fails.
    ///
    /// # Errors
    ///
    /// Returns the validation failure.
    pub fn update(&self, config: Config) -> Result<()> {
        ConfigValidator::validate(&config)?;
        debug!("Updating cached configuration, locale {}", config.locale.default_locale);
        self.config.store(Arc::new(config));
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timephrase_common::LocaleName;

    #[test]
    fn test_update_replaces_config() {
        let cache = ConfigCache::default();
        let before = cache.get();

        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new("ko");
        cache.update(config).unwrap();

        assert_eq!(cache.get().locale.default_locale.as_str(), "ko");
        // Readers holding the old snapshot keep it.
        assert_eq!(before.locale.default_locale.as_str(), "en_us");
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let cache = ConfigCache::default();

        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new("en us");
        assert!(cache.update(config).is_err());

        let mut config = Config::default();
        config.locale.fallback_locale = Some(LocaleName::new("xx_yy"));
        assert!(cache.update(config).is_err());
        assert_eq!(cache.get().locale.default_locale.as_str(), "en_us");
    }

    #[test]
    fn test_unknown_default_with_fallback_is_cached() {
        let cache = ConfigCache::default();

        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new("tlh");
        config.locale.fallback_locale = Some(LocaleName::new("en"));
        cache.update(config).unwrap();

        assert_eq!(cache.get().locale.default_locale.as_str(), "tlh");
    }
}
