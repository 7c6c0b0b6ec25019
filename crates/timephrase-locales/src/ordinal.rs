//! Ordinal number rendering

/// Renders a number as an ordinal in a locale's style
pub type OrdinalFormatter = fn(u64) -> String;

/// Plain number, used by locales without an ordinal marker
pub fn plain_ordinal(n: u64) -> String {
    n.to_string()
}

/// English suffixes: 1st, 2nd, 3rd, 4th, with 11th-13th as exceptions
pub fn english_ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Swedish colon suffixes: 1:a, 2:a, 3:e, with 11:e and 12:e as exceptions
pub fn swedish_ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11 | 12) => "e",
        (1 | 2, _) => "a",
        _ => "e",
    };
    format!("{n}:{suffix}")
}

/// Greek masculine ordinal ending
pub fn greek_ordinal(n: u64) -> String {
    format!("{n}ος")
}

/// East Slavic short ordinal ending
pub fn slavic_ordinal(n: u64) -> String {
    format!("{n}-й")
}

/// Chinese ordinal prefix
pub fn chinese_ordinal(n: u64) -> String {
    format!("第{n}")
}

/// Korean ordinal counter
pub fn korean_ordinal(n: u64) -> String {
    format!("{n}번째")
}
