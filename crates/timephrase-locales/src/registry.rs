//! Locale registry and lookup
//!
//! The registry maps every declared alias to its [`LocaleDefinition`]. The
//! process-wide instance is built once, on first use, from
//! [`BUILTIN_LOCALES`] and is read-only afterwards.

use crate::data::BUILTIN_LOCALES;
use crate::definition::LocaleDefinition;
use crate::error::{LocaleError, LocaleResult};
use crate::locale::Locale;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use timephrase_common::normalize_locale_name;
use tracing::debug;

static GLOBAL_REGISTRY: Lazy<LocaleResult<Registry>> =
    Lazy::new(|| Registry::from_definitions(BUILTIN_LOCALES));

/// Alias index over a closed set of locale definitions
#[derive(Debug, Clone)]
pub struct Registry {
    by_alias: HashMap<String, &'static LocaleDefinition>,
    definitions: Vec<&'static LocaleDefinition>,
}

impl Registry {
    /// Build a registry, validating each definition and rejecting duplicate aliases
    pub fn from_definitions(definitions: &[&'static LocaleDefinition]) -> LocaleResult<Self> {
        let mut by_alias: HashMap<String, &'static LocaleDefinition> = HashMap::new();

        for &definition in definitions {
            definition.validate()?;

            for alias in definition.aliases {
                let key = normalize_locale_name(alias);
                if let Some(existing) = by_alias.get(&key) {
                    return Err(LocaleError::DuplicateAlias {
                        alias: key,
                        first: existing.name,
                        second: definition.name,
                    });
                }
                by_alias.insert(key, definition);
            }
        }

        debug!(
            "Built locale registry with {} locales and {} aliases",
            definitions.len(),
            by_alias.len()
        );

        Ok(Self {
            by_alias,
            definitions: definitions.to_vec(),
        })
    }

    /// The process-wide registry of built-in locales
    pub fn global() -> LocaleResult<&'static Self> {
        GLOBAL_REGISTRY.as_ref().map_err(Clone::clone)
    }

    /// Look up a locale by alias, ignoring ASCII case
    pub fn get(&self, name: &str) -> LocaleResult<Locale> {
        match self.definition(name) {
            Some(definition) => Locale::new(definition),
            None => {
                debug!("No locale registered for '{}'", name);
                Err(LocaleError::UnsupportedLocale {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Look up the static definition for an alias
    pub fn definition(&self, name: &str) -> Option<&'static LocaleDefinition> {
        self.by_alias.get(&normalize_locale_name(name)).copied()
    }

    /// Check whether an alias is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_alias.contains_key(&normalize_locale_name(name))
    }

    /// Every registered alias, sorted
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.by_alias.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Every definition, in registration order
    pub fn definitions(&self) -> &[&'static LocaleDefinition] {
        &self.definitions
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// Returns a new [`Locale`] for a registered alias
///
/// Matching ignores ASCII case only.
///
/// # Errors
///
/// [`LocaleError::UnsupportedLocale`] carrying `name` if no locale declares it.
pub fn get_locale(name: &str) -> LocaleResult<Locale> {
    Registry::global()?.get(name)
}

/// Check whether the global registry knows `name`
pub fn is_supported(name: &str) -> bool {
    Registry::global().is_ok_and(|registry| registry.contains(name))
}

/// Every alias known to the global registry, sorted
pub fn registered_aliases() -> Vec<&'static str> {
    Registry::global().map(Registry::aliases).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ENGLISH, GREEK, RUSSIAN};

    fn shadowing_english() -> &'static LocaleDefinition {
        Box::leak(Box::new(LocaleDefinition {
            name: "Shadowing English",
            aliases: &["en_gb", "el"],
            ..ENGLISH
        }))
    }

    #[test]
    fn test_global_registry_builds() {
        let registry = Registry::global().unwrap();
        assert_eq!(registry.definitions().len(), BUILTIN_LOCALES.len());
        assert_eq!(registry.len(), 14);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        let err = Registry::from_definitions(&[&ENGLISH, &GREEK, shadowing_english()]).unwrap_err();
        assert_eq!(
            err,
            LocaleError::DuplicateAlias {
                alias: "el".to_string(),
                first: "Greek",
                second: "Shadowing English",
            }
        );
    }

    #[test]
    fn test_custom_registry() {
        let registry = Registry::from_definitions(&[&RUSSIAN]).unwrap();
        assert_eq!(registry.aliases(), vec!["ru", "ru_ru"]);
        assert!(registry.contains("RU_ru"));
        assert!(!registry.contains("ru-ru"));
        assert!(!registry.contains("en"));
        assert_eq!(registry.definition("ru").map(|d| d.name), Some("Russian"));
    }

    #[test]
    fn test_unsupported_locale_keeps_given_name() {
        let registry = Registry::from_definitions(&[&ENGLISH]).unwrap();
        let err = registry.get("Not-A-Real-Locale").unwrap_err();
        assert_eq!(
            err,
            LocaleError::UnsupportedLocale {
                name: "Not-A-Real-Locale".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unsupported locale 'Not-A-Real-Locale'");
    }
}
