//! Plural-form selection for languages with grammatical number agreement
//!
//! Locales whose phrases change shape with the number ("1 день", "2 дня",
//! "5 дней") declare their timeframe phrases as a triple of templates and
//! supply a [`PluralFormSelector`] that maps a magnitude to one of the three
//! forms. Locales without a selector only use single templates.

use std::fmt;

/// One of the three agreement classes a counted phrase can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    /// Singular-like form ("1 день", "21 день")
    One,
    /// Paucal form ("2 дня", "34 дня")
    Few,
    /// Everything else, including the teens ("5 дней", "11 дней")
    Many,
}

impl PluralForm {
    /// Position of this form inside a phrase triple
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Few => 1,
            Self::Many => 2,
        }
    }

    /// Get the CLDR-style category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Few => "few",
            Self::Many => "many",
        }
    }
}

impl fmt::Display for PluralForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the magnitude of a delta to a plural form
pub type PluralFormSelector = fn(u64) -> PluralForm;

/// East Slavic agreement rule (Russian, Ukrainian)
///
/// Numbers ending in 1 take `One` and numbers ending in 2-4 take `Few`,
/// except 11-19 (mod 100) which always take `Many`.
pub fn slavic_plural_form(n: u64) -> PluralForm {
    let last = n % 10;
    let last_two = n % 100;

    if last == 1 && last_two != 11 {
        PluralForm::One
    } else if (2..=4).contains(&last) && !(10..20).contains(&last_two) {
        PluralForm::Few
    } else {
        PluralForm::Many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slavic_rule_reference_points() {
        assert_eq!(slavic_plural_form(1), PluralForm::One);
        assert_eq!(slavic_plural_form(2), PluralForm::Few);
        assert_eq!(slavic_plural_form(4), PluralForm::Few);
        assert_eq!(slavic_plural_form(5), PluralForm::Many);
        assert_eq!(slavic_plural_form(11), PluralForm::Many);
        assert_eq!(slavic_plural_form(21), PluralForm::One);
        assert_eq!(slavic_plural_form(22), PluralForm::Few);
        assert_eq!(slavic_plural_form(25), PluralForm::Many);
    }

    #[test]
    fn test_slavic_rule_teens() {
        for n in 10..20 {
            assert_eq!(slavic_plural_form(n), PluralForm::Many, "n = {n}");
            assert_eq!(slavic_plural_form(n + 100), PluralForm::Many, "n = {}", n + 100);
        }
    }

    #[test]
    fn test_zero_and_large_values() {
        assert_eq!(slavic_plural_form(0), PluralForm::Many);
        assert_eq!(slavic_plural_form(u64::MAX), PluralForm::Many);
        assert_eq!(slavic_plural_form(1_000_001), PluralForm::One);
    }

    #[test]
    fn test_form_indices() {
        assert_eq!(PluralForm::One.index(), 0);
        assert_eq!(PluralForm::Few.index(), 1);
        assert_eq!(PluralForm::Many.index(), 2);
        assert_eq!(PluralForm::Few.to_string(), "few");
    }
}
