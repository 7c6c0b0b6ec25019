//! Configuration schema definitions using serde with validation.

use serde::{Deserialize, Serialize};
use timephrase_common::{is_valid_locale_name, LocaleName, TimephraseError};
use timephrase_locales::is_supported;
use tracing::warn;

/// Main configuration structure for Timephrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale selection.
    pub locale: LocaleConfig,
}

/// Locale selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used for every phrase unless overridden.
    pub default_locale: LocaleName,
    /// Locale used when the default cannot be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<LocaleName>,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), TimephraseError> {
        self.locale.validate()
    }
}

impl LocaleConfig {
    /// Validates the locale configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Config`] if a locale name is malformed, if the
    /// fallback is not registered, or if the default is not registered and no
    /// fallback is configured. An unregistered default with a registered
    /// fallback is accepted so resolution can fall back at runtime.
    pub fn validate(&self) -> Result<(), TimephraseError> {
        check_locale_syntax("locale.default_locale", &self.default_locale)?;

        match &self.fallback_locale {
            Some(fallback) => {
                check_locale_syntax("locale.fallback_locale", fallback)?;
                check_locale_registered("locale.fallback_locale", fallback)?;

                if !is_supported(self.default_locale.as_str()) {
                    warn!(
                        "locale.default_locale '{}' is not a supported locale, {} will be used",
                        self.default_locale, fallback
                    );
                }
            }
            None => check_locale_registered("locale.default_locale", &self.default_locale)?,
        }

        Ok(())
    }
}

fn check_locale_syntax(field: &str, name: &LocaleName) -> Result<(), TimephraseError> {
    if name.as_str().trim().is_empty() {
        return Err(TimephraseError::Config(format!("{field} cannot be empty")));
    }

    if !is_valid_locale_name(name.as_str()) {
        return Err(TimephraseError::Config(format!(
            "{field} '{name}' is not a valid locale name"
        )));
    }

    Ok(())
}

fn check_locale_registered(field: &str, name: &LocaleName) -> Result<(), TimephraseError> {
    if !is_supported(name.as_str()) {
        return Err(TimephraseError::Config(format!(
            "{field} '{name}' is not a supported locale"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_locale_is_rejected() {
        let config = Config {
            locale: LocaleConfig {
                default_locale: LocaleName::new("  "),
                fallback_locale: None,
            },
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: locale.default_locale cannot be empty"
        );
    }

    #[test]
    fn test_malformed_and_unknown_locales_are_rejected() {
        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new("en US");
        assert!(config.validate().is_err());

        config.locale.default_locale = LocaleName::new("en");
        config.locale.fallback_locale = Some(LocaleName::new("tlh"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("locale.fallback_locale 'tlh'"));
    }

    #[test]
    fn test_unknown_default_needs_registered_fallback() {
        let mut config = Config::default();
        config.locale.default_locale = LocaleName::new("tlh");
        config.locale.fallback_locale = Some(LocaleName::new("en"));
        assert!(config.validate().is_ok());

        config.locale.fallback_locale = None;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: locale.default_locale 'tlh' is not a supported locale"
        );
    }
}
