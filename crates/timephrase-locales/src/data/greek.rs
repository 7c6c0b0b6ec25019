use crate::definition::LocaleDefinition;
use crate::ordinal::greek_ordinal;
use crate::phrase::{Phrase::Single, TimeframeTable};

pub static GREEK: LocaleDefinition = LocaleDefinition {
    name: "Greek",
    language: "el-GR",
    aliases: &["el"],
    past: "{0} πριν",
    future: "σε {0}",
    timeframes: TimeframeTable {
        now: Single("τώρα"),
        seconds: Single("δευτερόλεπτα"),
        minute: Single("ένα λεπτό"),
        minutes: Single("{0} λεπτά"),
        hour: Single("μια ώρα"),
        hours: Single("{0} ώρες"),
        day: Single("μια μέρα"),
        days: Single("{0} μέρες"),
        month: Single("ένα μήνα"),
        months: Single("{0} μήνες"),
        year: Single("ένα χρόνο"),
        years: Single("{0} χρόνια"),
    },
    month_names: [
        "", "Ιανουάριος", "Φεβρουάριος", "Μάρτιος", "Απρίλιος", "Μάιος", "Ιούνιος", "Ιούλιος",
        "Αύγουστος", "Σεπτέμβριος", "Οκτώβριος", "Νοέμβριος", "Δεκέμβριος",
    ],
    month_abbreviations: [
        "", "Ιαν", "Φεβ", "Μαρ", "Απρ", "Μαϊ", "Ιουν", "Ιουλ", "Αυγ", "Σεπ", "Οκτ", "Νοε", "Δεκ",
    ],
    day_names: ["Δευτέρα", "Τρίτη", "Τετάρτη", "Πέμπτη", "Παρασκευή", "Σάββατο", "Κυριακή"],
    day_abbreviations: ["Δευ", "Τρι", "Τετ", "Πεμ", "Παρ", "Σαβ", "Κυρ"],
    plural: None,
    ordinal: greek_ordinal,
};
