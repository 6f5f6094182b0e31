//! ICS date/time parsing at day granularity.
//!
//! All results are UTC calendar dates. Time-of-day is discarded.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// Leading `YYYYMMDD`, with anything after it ignored.
static BASIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})(\d{2})").expect("basic date regex should be valid")
});

/// Parses an ICS date or date-time string into a UTC calendar date.
///
/// All-day events carry a bare `20240101` (`DTSTART;VALUE=DATE`). Any value
/// starting with eight digits is read as `YYYYMMDD` and whatever follows
/// (`T093000Z`, `T093000`) is ignored.
///
/// Other values fall back to RFC 3339 and RFC 2822 timestamps (converted to
/// UTC first), then `2024-01-01T09:30:00` (naive, taken as UTC) and
/// `2024-01-01`.
///
/// Returns `None` when nothing matches or the fields are not a real date.
pub fn parse_ics_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Some(caps) = BASIC_DATE.captures(value) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    parse_general(value)
}

fn parse_general(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
