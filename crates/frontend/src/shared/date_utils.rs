/// Utilities for date parsing and formatting
///
/// Provides consistent date handling across the application
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Calendar day of a backend timestamp, in the browser's local time zone.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// bare `YYYY-MM-DD`, or epoch milliseconds. Returns `None` for anything else.
pub fn parse_calendar_day(value: &Value) -> Option<NaiveDate> {
    parse_calendar_day_in(value, &Local)
}

/// Same as [`parse_calendar_day`], with the day taken in `tz`.
/// Timestamps without an offset are already local and are taken as-is.
pub fn parse_calendar_day_in<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str_in(s, tz),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.with_timezone(tz).date_naive()),
        _ => None,
    }
}

pub fn parse_date_str_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a week range as "DD/MM - DD/MM/YYYY"
/// Example: 2024-01-07..2024-01-13 -> "07/01 - 13/01/2024"
pub fn format_week_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%d/%m"), end.format("%d/%m/%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc_plus_7() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn test_parse_supported_formats() {
        assert_eq!(parse_date_str_in("2024-01-08", &Utc), Some(day(2024, 1, 8)));
        assert_eq!(parse_date_str_in("2024-01-08T10:15:00Z", &Utc), Some(day(2024, 1, 8)));
        assert_eq!(parse_date_str_in("2024-01-08T10:15:00.123Z", &Utc), Some(day(2024, 1, 8)));
        assert_eq!(parse_date_str_in("2024-01-08 23:59:59", &Utc), Some(day(2024, 1, 8)));
        assert_eq!(parse_date_str_in("2024-01-08T23:59:59.5", &Utc), Some(day(2024, 1, 8)));
    }

    #[test]
    fn test_rfc3339_day_is_taken_in_the_given_zone() {
        let evening_utc = "2024-01-13T20:00:00Z";
        assert_eq!(parse_date_str_in(evening_utc, &Utc), Some(day(2024, 1, 13)));
        assert_eq!(parse_date_str_in(evening_utc, &utc_plus_7()), Some(day(2024, 1, 14)));
        assert_eq!(
            parse_date_str_in("2024-01-08T01:00:00+03:00", &Utc),
            Some(day(2024, 1, 7))
        );
    }

    #[test]
    fn test_naive_timestamps_ignore_the_zone() {
        assert_eq!(
            parse_date_str_in("2024-01-13 20:00:00", &utc_plus_7()),
            Some(day(2024, 1, 13))
        );
        assert_eq!(parse_date_str_in("2024-01-13", &utc_plus_7()), Some(day(2024, 1, 13)));
    }

    #[test]
    fn test_epoch_millis() {
        // 2024-01-08T00:00:00Z
        let millis = json!(1_704_672_000_000_i64);
        assert_eq!(parse_calendar_day_in(&millis, &Utc), Some(day(2024, 1, 8)));
        // 2024-01-07T20:00:00Z
        let evening = json!(1_704_657_600_000_i64);
        assert_eq!(parse_calendar_day_in(&evening, &utc_plus_7()), Some(day(2024, 1, 8)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_date_str_in("invalid", &Utc), None);
        assert_eq!(parse_date_str_in("2024-13-40", &Utc), None);
        assert_eq!(parse_calendar_day(&Value::Null), None);
        assert_eq!(parse_calendar_day(&json!(true)), None);
    }

    #[test]
    fn test_format_week_label() {
        assert_eq!(
            format_week_label(day(2024, 1, 7), day(2024, 1, 13)),
            "07/01 - 13/01/2024"
        );
        assert_eq!(
            format_week_label(day(2023, 12, 31), day(2024, 1, 6)),
            "31/12 - 06/01/2024"
        );
    }
}
