//! Date parsing helpers.
//!
//! The parsers only split and convert text; they do not check that the day
//! exists in the month.  That is `CalendarDate::new`'s job.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(i32, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 || parts[0].is_empty() {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in US `MM/DD/YYYY` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_mdy(s: &str) -> Option<(i32, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let month: u8 = parts[0].parse().ok()?;
    let day: u8 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse either an ISO or a US-style date.
///
/// # Errors
/// Returns [`Error::Parse`] when neither format matches.
pub fn parse_date_any(s: &str) -> Result<(i32, u8, u8)> {
    parse_iso_date(s)
        .or_else(|| parse_date_mdy(s))
        .ok_or_else(|| {
            Error::Parse(format!(
                "unrecognised date {s:?}; expected YYYY-MM-DD or MM/DD/YYYY"
            ))
        })
}

/// Parse a signed day count such as `"10"`, `"+3"` or `"-5"`.
pub fn parse_day_count(s: &str) -> Result<i64> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    digits
        .parse()
        .map_err(|_| Error::Parse(format!("invalid day count {s:?}")))
}
