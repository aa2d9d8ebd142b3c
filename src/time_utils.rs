// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing, formatting and calendar keys.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Formats tried, in order, for timestamps without an offset.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Formats tried for bare dates (interpreted as midnight).
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%d %B %Y", "%B %d, %Y"];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Leniently parse a local date string into a wall-clock timestamp.
///
/// Strava's `start_date_local` carries a `Z` suffix even though the value is
/// the athlete's local time, so any offset is dropped and the clock reading
/// kept as written. Returns `None` for anything unrecognised.
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_local());
    }

    // Trailing `Z` on an otherwise offset-less form, e.g. "2024-05-01 07:00:00Z"
    let s = s.strip_suffix('Z').unwrap_or(s);

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Monday of the week containing `date`.
///
/// Weeks always start on Monday, independent of locale. `None` when that
/// Monday falls before the earliest representable date.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, s).unwrap())
    }

    #[test]
    fn test_parse_strava_local_keeps_wall_clock() {
        assert_eq!(
            parse_local_datetime("2024-05-01T07:00:00Z"),
            Some(dt(2024, 5, 1, 7, 0, 0))
        );
        assert_eq!(
            parse_local_datetime("2024-05-01T07:00:00+02:00"),
            Some(dt(2024, 5, 1, 7, 0, 0))
        );
    }

    #[test]
    fn test_parse_lenient_forms() {
        assert_eq!(
            parse_local_datetime("2024-05-01 07:30:15"),
            Some(dt(2024, 5, 1, 7, 30, 15))
        );
        assert_eq!(
            parse_local_datetime("2024-05-01T07:30"),
            Some(dt(2024, 5, 1, 7, 30, 0))
        );
        assert_eq!(
            parse_local_datetime("  2024-05-01  "),
            Some(dt(2024, 5, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_local_datetime("2024/05/01"),
            Some(dt(2024, 5, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_local_datetime("1 May 2024"),
            Some(dt(2024, 5, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_local_datetime("Wed, 01 May 2024 07:00:00 +0000"),
            Some(dt(2024, 5, 1, 7, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_local_datetime(""), None);
        assert_eq!(parse_local_datetime("yesterday-ish"), None);
        assert_eq!(parse_local_datetime("2024-13-45"), None);
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-01 was a Wednesday
        let wed = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2024, 4, 29));

        let mon = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
        assert_eq!(week_start(mon), Some(mon));

        let sun = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        assert_eq!(week_start(sun), Some(mon));
    }

    #[test]
    fn test_week_start_at_earliest_date() {
        // NaiveDate::MIN is a Thursday; its Monday is not representable
        assert_eq!(week_start(NaiveDate::MIN), None);
        assert_eq!(
            parse_local_datetime(&NaiveDate::MIN.to_string()).map(|dt| dt.date()),
            Some(NaiveDate::MIN)
        );
    }

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let date = DateTime::from_timestamp(1_714_546_800, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-05-01T07:00:00Z");
    }
}
