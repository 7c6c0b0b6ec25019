//! Locale-aware relative time phrases for Timephrase
//!
//! This crate turns a timeframe category and a signed delta into a natural
//! language phrase ("3 hours ago", "через 2 дня"). It includes:
//!
//! - A process-wide registry of built-in locales, keyed by alias
//! - Per-locale phrase tables with past/future wrappers
//! - Three-way plural-form selection for Slavic locales
//! - Month and day name tables with a reverse month lookup
//! - Locale-specific ordinal numbers
//!
//! # Example
//!
//! ```rust
//! use timephrase_locales::{get_locale, Timeframe};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let english = get_locale("en_US")?;
//! assert_eq!(english.describe(Timeframe::Hours, -3), "3 hours ago");
//!
//! let russian = get_locale("ru")?;
//! assert_eq!(russian.describe(Timeframe::Days, 2), "через 2 дня");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod data;
pub mod definition;
pub mod error;
pub mod locale;
pub mod ordinal;
pub mod phrase;
pub mod plural;
pub mod registry;
pub mod timeframe;

pub use definition::LocaleDefinition;
pub use error::{LocaleError, LocaleResult, NameTable};
pub use locale::Locale;
pub use ordinal::OrdinalFormatter;
pub use phrase::{Phrase, TimeframeTable};
pub use plural::{slavic_plural_form, PluralForm, PluralFormSelector};
pub use registry::{get_locale, is_supported, registered_aliases, Registry};
pub use timeframe::Timeframe;
