use crate::definition::LocaleDefinition;
use crate::ordinal::korean_ordinal;
use crate::phrase::{Phrase::Single, TimeframeTable};

const MONTHS: [&str; 13] = [
    "", "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];

pub static KOREAN: LocaleDefinition = LocaleDefinition {
    name: "Korean",
    language: "ko-KR",
    aliases: &["ko", "ko_kr"],
    past: "{0} 전",
    future: "{0} 후",
    timeframes: TimeframeTable {
        now: Single("현재"),
        seconds: Single("초"),
        minute: Single("일 분"),
        minutes: Single("{0}분"),
        hour: Single("1시간"),
        hours: Single("{0}시간"),
        day: Single("1일"),
        days: Single("{0}일"),
        month: Single("1개월"),
        months: Single("{0}개월"),
        year: Single("1년"),
        years: Single("{0}년"),
    },
    month_names: MONTHS,
    month_abbreviations: MONTHS,
    day_names: ["월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일"],
    day_abbreviations: ["월", "화", "수", "목", "금", "토", "일"],
    plural: None,
    ordinal: korean_ordinal,
};
