use crate::definition::LocaleDefinition;
use crate::ordinal::english_ordinal;
use crate::phrase::{Phrase::Single, TimeframeTable};

pub static ENGLISH: LocaleDefinition = LocaleDefinition {
    name: "English",
    language: "en-US",
    aliases: &["en", "en_us"],
    past: "{0} ago",
    future: "in {0}",
    timeframes: TimeframeTable {
        now: Single("just now"),
        seconds: Single("seconds"),
        minute: Single("a minute"),
        minutes: Single("{0} minutes"),
        hour: Single("an hour"),
        hours: Single("{0} hours"),
        day: Single("a day"),
        days: Single("{0} days"),
        month: Single("a month"),
        months: Single("{0} months"),
        year: Single("a year"),
        years: Single("{0} years"),
    },
    month_names: [
        "", "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    month_abbreviations: [
        "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    day_abbreviations: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    plural: None,
    ordinal: english_ordinal,
};
