// gdpr-backend/src/types/datetime.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// フォームから受け付ける日時形式 (datetime-local 等)。タイムゾーンなしはUTCとみなす
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// エクスポート時の日時表記
pub const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// フォームの日時文字列を解釈する。空または不正な値は None
pub fn parse_form_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

pub fn format_export_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format(EXPORT_DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}
