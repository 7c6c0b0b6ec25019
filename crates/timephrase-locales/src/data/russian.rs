use crate::definition::LocaleDefinition;
use crate::ordinal::slavic_ordinal;
use crate::phrase::{
    Phrase::{Plural, Single},
    TimeframeTable,
};
use crate::plural::slavic_plural_form;

pub static RUSSIAN: LocaleDefinition = LocaleDefinition {
    name: "Russian",
    language: "ru-RU",
    aliases: &["ru", "ru_ru"],
    past: "{0} назад",
    future: "через {0}",
    timeframes: TimeframeTable {
        now: Single("сейчас"),
        seconds: Single("несколько секунд"),
        minute: Single("минуту"),
        minutes: Plural(["{0} минута", "{0} минуты", "{0} минут"]),
        hour: Single("час"),
        hours: Plural(["{0} час", "{0} часа", "{0} часов"]),
        day: Single("день"),
        days: Plural(["{0} день", "{0} дня", "{0} дней"]),
        month: Single("месяц"),
        months: Plural(["{0} месяц", "{0} месяца", "{0} месяцев"]),
        year: Single("год"),
        years: Plural(["{0} год", "{0} года", "{0} лет"]),
    },
    month_names: [
        "", "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ],
    month_abbreviations: [
        "", "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
    ],
    day_names: [
        "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
    ],
    day_abbreviations: ["пн", "вт", "ср", "чт", "пт", "сб", "вс"],
    plural: Some(slavic_plural_form),
    ordinal: slavic_ordinal,
};
