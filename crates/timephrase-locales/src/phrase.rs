//! Phrase templates and per-locale timeframe tables

use crate::plural::{PluralForm, PluralFormSelector};
use crate::timeframe::Timeframe;
use timephrase_common::render_placeholder;

/// A template for one timeframe category
///
/// Templates use `{0}` as the placeholder for the magnitude of the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// One form for every number
    Single(&'static str),
    /// One form per [`PluralForm`], ordered one, few, many
    Plural([&'static str; 3]),
}

impl Phrase {
    /// Render the phrase for magnitude `n`
    ///
    /// A plural triple needs a selector; without one the `Many` form is used.
    /// Registry validation rejects definitions that would reach that case.
    pub fn render(&self, n: u64, selector: Option<PluralFormSelector>) -> String {
        render_placeholder(self.template_for(n, selector), n)
    }

    /// Pick the template `render` would use for magnitude `n`
    pub fn template_for(&self, n: u64, selector: Option<PluralFormSelector>) -> &'static str {
        match self {
            Self::Single(template) => *template,
            Self::Plural(forms) => {
                let form = selector.map_or(PluralForm::Many, |select| select(n));
                forms[form.index()]
            }
        }
    }

    /// Whether this phrase carries grammatical number variants
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// Every template this phrase can produce
    pub fn templates(&self) -> &[&'static str] {
        match self {
            Self::Single(template) => std::slice::from_ref(template),
            Self::Plural(forms) => forms,
        }
    }
}

/// Phrases for every timeframe category of one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeTable {
    pub now: Phrase,
    pub seconds: Phrase,
    pub minute: Phrase,
    pub minutes: Phrase,
    pub hour: Phrase,
    pub hours: Phrase,
    pub day: Phrase,
    pub days: Phrase,
    pub month: Phrase,
    pub months: Phrase,
    pub year: Phrase,
    pub years: Phrase,
}

impl TimeframeTable {
    /// Get the phrase for a category
    pub fn get(&self, timeframe: Timeframe) -> &Phrase {
        match timeframe {
            Timeframe::Now => &self.now,
            Timeframe::Seconds => &self.seconds,
            Timeframe::Minute => &self.minute,
            Timeframe::Minutes => &self.minutes,
            Timeframe::Hour => &self.hour,
            Timeframe::Hours => &self.hours,
            Timeframe::Day => &self.day,
            Timeframe::Days => &self.days,
            Timeframe::Month => &self.month,
            Timeframe::Months => &self.months,
            Timeframe::Year => &self.year,
            Timeframe::Years => &self.years,
        }
    }

    /// Iterate over `(category, phrase)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &Phrase)> + '_ {
        Timeframe::ALL.into_iter().map(move |timeframe| (timeframe, self.get(timeframe)))
    }
}
