//! Property tests for the locale-name utilities.

use proptest::prelude::*;
use timephrase_common::utils::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(name in "[A-Za-z]{2,3}(_[A-Za-z0-9]{2,4})?") {
        let once = normalize_locale_name(&name);
        prop_assert_eq!(normalize_locale_name(&once), once.clone());
    }

    #[test]
    fn normalize_ignores_case(name in "[a-z]{2,3}(_[a-z]{2})?") {
        prop_assert_eq!(normalize_locale_name(&name.to_uppercase()), name);
    }

    #[test]
    fn normalize_keeps_separators_and_whitespace(name in "[a-z]{2,3}_[a-z]{2}") {
        let hyphenated = name.replace('_', "-");
        prop_assert_eq!(normalize_locale_name(&hyphenated), hyphenated.clone());
        prop_assert!(!is_valid_locale_name(&hyphenated));
        prop_assert_ne!(normalize_locale_name(&format!(" {name} ")), name);
    }

    #[test]
    fn well_formed_names_are_valid(name in "[a-z]{2,3}(_[A-Za-z]{2})?") {
        prop_assert!(is_valid_locale_name(&name));
    }

    #[test]
    fn render_substitutes_every_number(n in any::<u64>()) {
        prop_assert_eq!(render_placeholder("{0} minutes", n), format!("{n} minutes"));
    }
}

#[test]
fn test_names_with_punctuation_are_invalid() {
    assert!(!is_valid_locale_name("en.US"));
    assert!(!is_valid_locale_name("-en"));
    assert!(!is_valid_locale_name("en_"));
    assert!(!is_valid_locale_name("   "));
}
