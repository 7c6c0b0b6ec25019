//! Integration tests for locale lookup through the global registry

use timephrase_common::test_utils::init_test_logging;
use timephrase_locales::{get_locale, is_supported, registered_aliases, LocaleError, Registry};

#[test]
fn test_every_alias_resolves_in_any_case() {
    init_test_logging();

    for alias in registered_aliases() {
        let given = get_locale(alias).unwrap();
        let upper = get_locale(&alias.to_uppercase()).unwrap();
        let lower = get_locale(&alias.to_lowercase()).unwrap();

        assert_eq!(given.name(), upper.name(), "alias {alias}");
        assert_eq!(given.name(), lower.name(), "alias {alias}");
        assert!(std::ptr::eq(given.definition(), upper.definition()));
    }
}

#[test]
fn test_only_case_is_folded() {
    init_test_logging();
    init_test_logging();

    assert_eq!(get_locale("ZH_tw").unwrap().name(), "Chinese (Traditional)");
    for name in ["en-US", "zh-TW", "uk-UA", " en ", "en_us "] {
        assert_eq!(
            get_locale(name).unwrap_err(),
            LocaleError::UnsupportedLocale { name: name.to_string() }
        );
        assert!(!is_supported(name));
    }
}

#[test]
fn test_unknown_locale_is_unsupported() {
    init_test_logging();

    let err = get_locale("not-a-real-locale").unwrap_err();
    assert_eq!(
        err,
        LocaleError::UnsupportedLocale {
            name: "not-a-real-locale".to_string()
        }
    );
    assert!(!is_supported("not-a-real-locale"));
    assert!(get_locale("").is_err());
}

#[test]
fn test_registered_alias_contract() {
    let expected = [
        "el", "en", "en_us", "ko", "ko_kr", "ru", "ru_ru", "sv", "sv_se", "ua", "uk_ua", "zh",
        "zh_cn", "zh_tw",
    ];
    assert_eq!(registered_aliases(), expected);
    for alias in expected {
        assert!(is_supported(alias));
    }
}

#[test]
fn test_lookup_returns_fresh_instances() {
    let first = get_locale("sv").unwrap();
    let second = get_locale("sv_se").unwrap();
    assert!(std::ptr::eq(first.definition(), second.definition()));

    // Dropping one instance leaves the other usable.
    drop(first);
    assert_eq!(second.month_number("maj"), Some(5));
}

#[test]
fn test_global_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let alias = registered_aliases()[i % 14];
                get_locale(alias).map(|locale| locale.name())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert!(std::ptr::eq(Registry::global().unwrap(), Registry::global().unwrap()));
}

#[test]
fn test_language_identifiers() {
    assert_eq!(
        get_locale("zh_tw").unwrap().language_identifier().unwrap().to_string(),
        "zh-TW"
    );
    assert_eq!(
        get_locale("ru_ru").unwrap().language_identifier().unwrap().to_string(),
        "ru-RU"
    );
    assert_eq!(
        get_locale("ua").unwrap().language_identifier().unwrap().to_string(),
        "uk-UA"
    );
    assert_eq!(
        get_locale("uk_ua").unwrap().language_identifier().unwrap().language.as_str(),
        "uk"
    );
    assert_eq!(
        get_locale("ko_kr").unwrap().language_identifier().unwrap().language.as_str(),
        "ko"
    );
}
