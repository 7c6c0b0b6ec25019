use crate::definition::LocaleDefinition;
use crate::ordinal::slavic_ordinal;
use crate::phrase::{
    Phrase::{Plural, Single},
    TimeframeTable,
};
use crate::plural::slavic_plural_form;

pub static UKRAINIAN: LocaleDefinition = LocaleDefinition {
    name: "Ukrainian",
    language: "uk-UA",
    aliases: &["ua", "uk_ua"],
    past: "{0} тому",
    future: "за {0}",
    timeframes: TimeframeTable {
        now: Single("зараз"),
        seconds: Single("кілька секунд"),
        minute: Single("хвилину"),
        minutes: Plural(["{0} хвилина", "{0} хвилини", "{0} хвилин"]),
        hour: Single("годину"),
        hours: Plural(["{0} година", "{0} години", "{0} годин"]),
        day: Single("день"),
        days: Plural(["{0} день", "{0} дні", "{0} днів"]),
        month: Single("місяць"),
        months: Plural(["{0} місяць", "{0} місяці", "{0} місяців"]),
        year: Single("рік"),
        years: Plural(["{0} рік", "{0} роки", "{0} років"]),
    },
    month_names: [
        "", "січень", "лютий", "березень", "квітень", "травень", "червень", "липень", "серпень",
        "вересень", "жовтень", "листопад", "грудень",
    ],
    month_abbreviations: [
        "", "січ", "лют", "бер", "кві", "тра", "чер", "лип", "сер", "вер", "жов", "лис", "гру",
    ],
    day_names: ["понеділок", "вівторок", "середа", "четвер", "пʼятниця", "субота", "неділя"],
    day_abbreviations: ["пн", "вт", "ср", "чт", "пт", "сб", "нд"],
    plural: Some(slavic_plural_form),
    ordinal: slavic_ordinal,
};
