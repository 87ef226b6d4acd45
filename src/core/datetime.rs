//! Parsing of the timestamps the Store attaches to records.
//!
//! The Store writes a full ISO-8601 `timestamp` (optionally with fractional
//! seconds and offset) and a display `date` that is either
//! `%Y-%m-%d %H:%M:%S` or a bare `%Y-%m-%d`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse any timestamp shape the Store is known to produce.
///
/// Returns `None` for empty or unrecognised input.
#[must_use]
pub fn parse_store_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|d| NaiveDateTime::new(d, NaiveTime::MIN))
}
