//! Runtime validation of configuration values.

use crate::schema::Config;
use timephrase_common::Result;
use tracing::warn;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure as a boxed [`timephrase_common::TimephraseError`].
    pub fn validate(config: &Config) -> Result<()> {
        config.validate().map_err(|e| {
            warn!("Configuration rejected: {}", e);
            e.into()
        })
    }

    /// Checks a configuration without reporting the reason.
    #[must_use]
    pub fn is_valid(config: &Config) -> bool {
        config.validate().is_ok()
    }
}
