//! Built-in locale definitions
//!
//! Adding a locale means adding one `static` [`LocaleDefinition`] and
//! listing it in [`BUILTIN_LOCALES`]; nothing else changes.

mod chinese;
mod english;
mod greek;
mod korean;
mod russian;
mod swedish;
mod ukrainian;

use crate::definition::LocaleDefinition;

pub use chinese::{CHINESE_CN, CHINESE_TW};
pub use english::ENGLISH;
pub use greek::GREEK;
pub use korean::KOREAN;
pub use russian::RUSSIAN;
pub use swedish::SWEDISH;
pub use ukrainian::UKRAINIAN;

/// Every locale the global registry is built from, in registration order
pub static BUILTIN_LOCALES: &[&LocaleDefinition] = &[
    &ENGLISH,
    &GREEK,
    &SWEDISH,
    &CHINESE_CN,
    &CHINESE_TW,
    &KOREAN,
    &RUSSIAN,
    &UKRAINIAN,
];
