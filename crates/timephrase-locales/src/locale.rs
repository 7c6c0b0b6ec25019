//! Locale instances and relative time formatting

use crate::definition::LocaleDefinition;
use crate::error::{LocaleError, LocaleResult, NameTable};
use crate::timeframe::Timeframe;
use chrono::{Month, Weekday};
use std::collections::HashMap;
use std::fmt;
use timephrase_common::render_placeholder;
use unic_langid::LanguageIdentifier;

/// A locale ready to format phrases
///
/// Instances are created per lookup and own their month reverse index, so
/// they can be shared across threads or mutated without affecting others.
#[derive(Clone)]
pub struct Locale {
    definition: &'static LocaleDefinition,
    month_numbers: HashMap<&'static str, u32>,
}

impl Locale {
    /// Create an instance from a static definition
    pub fn new(definition: &'static LocaleDefinition) -> LocaleResult<Self> {
        Ok(Self {
            definition,
            month_numbers: definition.month_index()?,
        })
    }

    /// The definition backing this instance
    pub fn definition(&self) -> &'static LocaleDefinition {
        self.definition
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Registry aliases, primary first
    pub fn aliases(&self) -> &'static [&'static str] {
        self.definition.aliases
    }

    /// Parse the definition's language tag as a BCP 47 language identifier
    pub fn language_identifier(&self) -> LocaleResult<LanguageIdentifier> {
        let tag = self.definition.language;
        tag.parse()
            .map_err(|_| LocaleError::InvalidLanguageId(tag.to_string()))
    }

    /// Describe a signed delta within a timeframe in plain language
    ///
    /// Negative deltas are in the past, zero and positive ones in the future.
    pub fn describe(&self, timeframe: Timeframe, delta: i64) -> String {
        let humanized = self.format_timeframe(timeframe, delta);
        self.format_relative(&humanized, timeframe, delta)
    }

    /// Like [`Locale::describe`], with the category given by name
    pub fn describe_named(&self, timeframe: &str, delta: i64) -> LocaleResult<String> {
        let timeframe: Timeframe = timeframe.parse()?;
        Ok(self.describe(timeframe, delta))
    }

    /// Render the bare timeframe phrase for the magnitude of `delta`
    pub fn format_timeframe(&self, timeframe: Timeframe, delta: i64) -> String {
        self.definition
            .timeframes
            .get(timeframe)
            .render(delta.unsigned_abs(), self.definition.plural)
    }

    /// Wrap a phrase in the past or future template
    ///
    /// `now` is direction-invariant and returned unchanged.
    pub fn format_relative(&self, phrase: &str, timeframe: Timeframe, delta: i64) -> String {
        if !timeframe.is_relative() {
            return phrase.to_string();
        }

        let direction = if delta < 0 {
            self.definition.past
        } else {
            self.definition.future
        };

        render_placeholder(direction, phrase)
    }

    /// Month name for `month` in 1-12
    pub fn month_name(&self, month: u32) -> LocaleResult<&'static str> {
        month_entry(&self.definition.month_names, month)
    }

    /// Month abbreviation for `month` in 1-12
    pub fn month_abbreviation(&self, month: u32) -> LocaleResult<&'static str> {
        month_entry(&self.definition.month_abbreviations, month)
    }

    /// Day name for ISO weekday `day`, Monday = 1 through Sunday = 7
    pub fn day_name(&self, day: u32) -> LocaleResult<&'static str> {
        day_entry(&self.definition.day_names, day)
    }

    /// Day abbreviation for ISO weekday `day`, Monday = 1 through Sunday = 7
    pub fn day_abbreviation(&self, day: u32) -> LocaleResult<&'static str> {
        day_entry(&self.definition.day_abbreviations, day)
    }

    /// Month name for a typed month
    pub fn month_name_of(&self, month: Month) -> &'static str {
        self.definition.month_names[month.number_from_month() as usize]
    }

    /// Day name for a typed weekday
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.definition.day_names[weekday.num_days_from_monday() as usize]
    }

    /// Day abbreviation for a typed weekday
    pub fn weekday_abbreviation(&self, weekday: Weekday) -> &'static str {
        self.definition.day_abbreviations[weekday.num_days_from_monday() as usize]
    }

    /// Month number for a full month name or abbreviation
    ///
    /// Matching is exact and case-sensitive. Unknown names yield `None` so
    /// callers can try several candidates.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.month_numbers.get(name).copied()
    }

    /// Render `n` as an ordinal in this locale's style
    pub fn ordinal_number(&self, n: u64) -> String {
        (self.definition.ordinal)(n)
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("name", &self.definition.name)
            .field("aliases", &self.definition.aliases)
            .finish()
    }
}

fn month_entry(table: &[&'static str; 13], month: u32) -> LocaleResult<&'static str> {
    if (1..=12).contains(&month) {
        Ok(table[month as usize])
    } else {
        Err(LocaleError::IndexOutOfRange {
            kind: NameTable::Month,
            index: month,
            max: 12,
        })
    }
}

fn day_entry(table: &[&'static str; 7], day: u32) -> LocaleResult<&'static str> {
    if (1..=7).contains(&day) {
        Ok(table[day as usize - 1])
    } else {
        Err(LocaleError::IndexOutOfRange {
            kind: NameTable::Day,
            index: day,
            max: 7,
        })
    }
}
