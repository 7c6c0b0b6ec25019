//! Static locale definitions
//!
//! A [`LocaleDefinition`] is plain data plus two optional strategies: a
//! plural-form selector and an ordinal formatter. Definitions are declared
//! as `static` items in [`crate::data`] and listed in
//! [`crate::data::BUILTIN_LOCALES`]; the registry never constructs them.

use crate::error::{LocaleError, LocaleResult};
use crate::ordinal::OrdinalFormatter;
use crate::phrase::TimeframeTable;
use crate::plural::PluralFormSelector;
use std::collections::HashMap;
use timephrase_common::{is_valid_locale_name, normalize_locale_name};
use unic_langid::LanguageIdentifier;

/// Templates and name tables for one language/region
#[derive(Debug, Clone, Copy)]
pub struct LocaleDefinition {
    /// English display name, also used in diagnostics
    pub name: &'static str,
    /// BCP 47 language tag, independent of the registry aliases
    pub language: &'static str,
    /// Lowercase registry aliases; the first one is the primary identifier
    pub aliases: &'static [&'static str],
    /// Wrapper for negative deltas, `{0}` receives the timeframe phrase
    pub past: &'static str,
    /// Wrapper for zero and positive deltas
    pub future: &'static str,
    pub timeframes: TimeframeTable,
    /// Index 0 is an empty placeholder so months index 1-12 directly
    pub month_names: [&'static str; 13],
    pub month_abbreviations: [&'static str; 13],
    /// Monday first
    pub day_names: [&'static str; 7],
    pub day_abbreviations: [&'static str; 7],
    pub plural: Option<PluralFormSelector>,
    pub ordinal: OrdinalFormatter,
}

impl LocaleDefinition {
    /// The primary alias, or the display name for a definition without aliases
    pub fn primary_alias(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.name)
    }

    /// Check the definition's internal consistency
    ///
    /// The registry runs this for every definition before indexing it.
    pub fn validate(&self) -> LocaleResult<()> {
        if self.aliases.is_empty() {
            return Err(self.invalid("declares no aliases"));
        }

        for alias in self.aliases {
            if !is_valid_locale_name(alias) || normalize_locale_name(alias) != *alias {
                return Err(self.invalid(format!("alias '{alias}' is not a lowercase locale name")));
            }
        }

        if self.language.parse::<LanguageIdentifier>().is_err() {
            return Err(self.invalid(format!("language tag '{}' does not parse", self.language)));
        }

        for (label, template) in [("past", self.past), ("future", self.future)] {
            if !template.contains("{0}") {
                return Err(self.invalid(format!("{label} template has no placeholder")));
            }
        }

        if self.plural.is_none() {
            if let Some((timeframe, _)) = self.timeframes.iter().find(|(_, phrase)| phrase.is_plural()) {
                return Err(self.invalid(format!(
                    "'{timeframe}' has plural forms but no plural selector is set"
                )));
            }
        }

        for (label, table) in [
            ("month name", &self.month_names),
            ("month abbreviation", &self.month_abbreviations),
        ] {
            if !table[0].is_empty() {
                return Err(self.invalid(format!("{label} table must start with an empty placeholder")));
            }
            if table[1..].iter().any(|entry| entry.is_empty()) {
                return Err(self.invalid(format!("{label} table has an empty entry")));
            }
        }

        for (label, table) in [("day name", &self.day_names), ("day abbreviation", &self.day_abbreviations)] {
            if table.iter().any(|entry| entry.is_empty()) {
                return Err(self.invalid(format!("{label} table has an empty entry")));
            }
        }

        self.month_index().map(|_| ())
    }

    /// Build the month name and abbreviation reverse index
    ///
    /// Fails if one spelling would map to two different months.
    pub(crate) fn month_index(&self) -> LocaleResult<HashMap<&'static str, u32>> {
        let mut index = HashMap::with_capacity(24);

        let entries = self.month_names[1..]
            .iter()
            .zip(1u32..)
            .chain(self.month_abbreviations[1..].iter().zip(1u32..));

        for (&name, month) in entries {
            if let Some(previous) = index.insert(name, month) {
                if previous != month {
                    return Err(self.invalid(format!(
                        "'{name}' names both month {previous} and month {month}"
                    )));
                }
            }
        }

        Ok(index)
    }

    fn invalid(&self, reason: impl Into<String>) -> LocaleError {
        LocaleError::InvalidDefinition {
            locale: self.name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ENGLISH, RUSSIAN};
    use crate::phrase::Phrase;

    #[test]
    fn test_builtin_definitions_are_valid() {
        for definition in crate::data::BUILTIN_LOCALES {
            assert!(definition.validate().is_ok(), "{} failed validation", definition.name);
        }
    }

    #[test]
    fn test_plural_phrases_require_selector() {
        let broken = LocaleDefinition {
            plural: None,
            ..RUSSIAN
        };
        let err = broken.validate().unwrap_err();
        assert!(matches!(err, LocaleError::InvalidDefinition { locale: "Russian", .. }));
    }

    #[test]
    fn test_aliases_must_be_lowercase() {
        let broken = LocaleDefinition {
            aliases: &["en", "en-US"],
            ..ENGLISH
        };
        assert!(broken.validate().is_err());

        let empty = LocaleDefinition { aliases: &[], ..ENGLISH };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_language_tag_must_parse() {
        let broken = LocaleDefinition {
            language: "not a tag",
            ..ENGLISH
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_wrappers_need_placeholder() {
        let broken = LocaleDefinition {
            past: "ago",
            ..ENGLISH
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_ambiguous_month_spelling_is_rejected() {
        let mut abbreviations = ENGLISH.month_abbreviations;
        abbreviations[2] = "Jan";
        let broken = LocaleDefinition {
            month_abbreviations: abbreviations,
            ..ENGLISH
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_single_phrase_locale_needs_no_selector() {
        let mut timeframes = ENGLISH.timeframes;
        timeframes.days = Phrase::Single("{0} days");
        let definition = LocaleDefinition { timeframes, ..ENGLISH };
        assert!(definition.validate().is_ok());
    }
}
