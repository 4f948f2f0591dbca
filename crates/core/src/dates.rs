// crates/core/src/dates.rs
//! Loose timestamp parsing and calendar-bucket helpers.
//!
//! Every helper takes an explicit `now`: each fetch result is an immutable
//! snapshot, and aggregation over it must be reproducible. All calendar math
//! is UTC; weeks start on Monday (ISO convention).

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use regex_lite::Regex;

/// Parse a backend timestamp leniently.
///
/// The backend emits both `"YYYY-MM-DD HH:MM:SS"` and RFC 3339 with
/// micro/nanosecond fractions. The first space is coerced to `T` and
/// fractional seconds are truncated to millisecond precision before parsing.
/// Offset-less timestamps are taken as UTC. Returns `None` for empty or
/// unparseable input; never panics.
pub fn parse_date_loose(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let coerced = trimmed.replacen(' ', "T", 1);
    let frac = Regex::new(r"(\.\d{3})\d+").unwrap();
    let coerced = frac.replace(&coerced, "$1").into_owned();

    if let Ok(dt) = DateTime::parse_from_rfc3339(&coerced) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&coerced, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&coerced, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0).unwrap().and_utc());
    }
    None
}

/// Calendar-day key (`"2026-08-06"`) used for streaks and daily buckets.
pub fn day_key(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Midnight at the start of `now`'s week (Monday 00:00 UTC).
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_monday = now.weekday().num_days_from_monday() as i64;
    let monday = now - Duration::days(days_since_monday);
    monday.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Midnight on the first day of the calendar month `back` months before `now`.
/// `back = 0` is the current month.
pub fn month_anchor(now: DateTime<Utc>, back: u32) -> DateTime<Utc> {
    let total_months = now.year() * 12 + now.month0() as i32 - back as i32;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// True when both timestamps fall in the same calendar month and year.
pub fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// How many days ago `date` was, rounded up. A date from earlier today is
/// 1 day ago; a date from this very instant (or the future) is <= 0.
pub fn days_ago_ceil(now: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    let seconds = (now - date).num_seconds() as f64;
    (seconds / 86_400.0).ceil() as i64
}

// ============================================================================
// Tests
// ============================================================================
