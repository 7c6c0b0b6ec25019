//! Shared utility functions for locale names.

/// Normalizes a locale name into its registry key.
///
/// Only ASCII case is folded, so `EN_us` maps to `en_us` while `en-US` and
/// ` en_us ` stay distinct from it.
#[must_use]
pub fn normalize_locale_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Checks that a locale name is syntactically plausible.
///
/// Accepts one or more ASCII alphanumeric subtags separated by `_`, the
/// spelling registry aliases use. This says nothing about whether the
/// locale is registered.
#[must_use]
pub fn is_valid_locale_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('_')
            .all(|subtag| !subtag.is_empty() && subtag.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Substitutes `value` for every `{0}` placeholder in `template`.
#[must_use]
pub fn render_placeholder(template: &str, value: impl std::fmt::Display) -> String {
    if template.contains("{0}") {
        template.replace("{0}", &value.to_string())
    } else {
        template.to_string()
    }
}
