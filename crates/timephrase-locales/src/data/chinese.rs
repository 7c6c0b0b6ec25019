use crate::definition::LocaleDefinition;
use crate::ordinal::chinese_ordinal;
use crate::phrase::{Phrase::Single, TimeframeTable};

const MONTH_NAMES: [&str; 13] = [
    "", "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

const DAY_NAMES: [&str; 7] = ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"];

const DAY_ABBREVIATIONS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

pub static CHINESE_CN: LocaleDefinition = LocaleDefinition {
    name: "Chinese (Simplified)",
    language: "zh-CN",
    aliases: &["zh", "zh_cn"],
    past: "{0}前",
    future: "{0}后",
    timeframes: TimeframeTable {
        now: Single("刚才"),
        seconds: Single("秒"),
        minute: Single("1分钟"),
        minutes: Single("{0}分钟"),
        hour: Single("1小时"),
        hours: Single("{0}小时"),
        day: Single("1天"),
        days: Single("{0}天"),
        month: Single("1个月"),
        months: Single("{0}个月"),
        year: Single("1年"),
        years: Single("{0}年"),
    },
    month_names: MONTH_NAMES,
    month_abbreviations: MONTH_ABBREVIATIONS,
    day_names: DAY_NAMES,
    day_abbreviations: DAY_ABBREVIATIONS,
    plural: None,
    ordinal: chinese_ordinal,
};

pub static CHINESE_TW: LocaleDefinition = LocaleDefinition {
    name: "Chinese (Traditional)",
    language: "zh-TW",
    aliases: &["zh_tw"],
    past: "{0}前",
    future: "{0}後",
    timeframes: TimeframeTable {
        now: Single("剛才"),
        seconds: Single("秒"),
        minute: Single("1分鐘"),
        minutes: Single("{0}分鐘"),
        hour: Single("1小時"),
        hours: Single("{0}小時"),
        day: Single("1天"),
        days: Single("{0}天"),
        month: Single("1個月"),
        months: Single("{0}個月"),
        year: Single("1年"),
        years: Single("{0}年"),
    },
    month_names: MONTH_NAMES,
    month_abbreviations: MONTH_ABBREVIATIONS,
    day_names: DAY_NAMES,
    day_abbreviations: DAY_ABBREVIATIONS,
    plural: None,
    ordinal: chinese_ordinal,
};
