//! The fixed UTC timestamp form used throughout the calendar file.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `YYYYMMDDTHHMMSSZ`
pub const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_FORMAT).to_string()
}

/// Parse a UTC timestamp. Anything that is not exactly the fixed form
/// (floating times, dates, offsets) is rejected.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, UTC_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
