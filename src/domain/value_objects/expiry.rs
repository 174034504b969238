//! ISO-8601 parsing for package rule expiration dates.
//!
//! Accepts a calendar date (`2025-06-01`, or the basic form `20250601`) or a
//! date-time (`2025-06-01T12:00:00`, `2025-06-01T12:00:00+02:00`), with an
//! optional trailing `Z` UTC designator. Surrounding whitespace is rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an expiration value into the calendar date it falls on.
pub fn parse_expiry_date(value: &str) -> Option<NaiveDate> {
    if let Some(date) = parse_basic_date(value.strip_suffix('Z').unwrap_or(value)) {
        return Some(date);
    }
    if !has_date_prefix(value) {
        return None;
    }

    let (value, utc) = match value.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (value, false),
    };

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }

    let with_offset = if utc {
        format!("{value}+00:00")
    } else {
        value.to_string()
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&with_offset) {
        return Some(dt.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// `YYYYMMDD`
fn parse_basic_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY-MM-DD` with zero-padded fields; chrono alone would accept `2025-6-1`.
fn has_date_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
        && (bytes.len() == 10 || matches!(bytes[10], b'T' | b't' | b' ' | b'Z'))
}
