use crate::definition::LocaleDefinition;
use crate::ordinal::swedish_ordinal;
use crate::phrase::{Phrase::Single, TimeframeTable};

pub static SWEDISH: LocaleDefinition = LocaleDefinition {
    name: "Swedish",
    language: "sv-SE",
    aliases: &["sv", "sv_se"],
    past: "för {0} sen",
    future: "om {0}",
    timeframes: TimeframeTable {
        now: Single("just nu"),
        seconds: Single("några sekunder"),
        minute: Single("en minut"),
        minutes: Single("{0} minuter"),
        hour: Single("en timme"),
        hours: Single("{0} timmar"),
        day: Single("en dag"),
        days: Single("{0} dagar"),
        month: Single("en månad"),
        months: Single("{0} månader"),
        year: Single("ett år"),
        years: Single("{0} år"),
    },
    month_names: [
        "", "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti",
        "september", "oktober", "november", "december",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    day_names: ["måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag"],
    day_abbreviations: ["mån", "tis", "ons", "tor", "fre", "lör", "sön"],
    plural: None,
    ordinal: swedish_ordinal,
};
