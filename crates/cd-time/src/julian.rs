//! Julian Day Number arithmetic on the proleptic Gregorian calendar.
//!
//! The Julian Day Number (JDN) is a continuous day count; 2000-01-01 is
//! JDN 2 451 545.  All day arithmetic in the crate goes through it:
//! differences are JDN subtractions and offsets are JDN additions converted
//! back to a calendar date.
//!
//! # Algorithms
//! * Gregorian → JDN: the March-based form, in which January and February
//!   are months 13 and 14 of the previous year so that the leap day falls at
//!   the end of the counting year.
//! * JDN → Gregorian: Meeus' algorithm in exact integer form (the factors
//!   36 524.25, 365.25 and 30.6001 are scaled to integers).  The century
//!   correction is applied for every JDN.  The classical form skips it below
//!   JDN 2 299 161 (1582-10-15), which would decode those days as
//!   Julian-calendar dates and break the round trip with the proleptic
//!   Gregorian conversion above.
//! * Weekday: Sakamoto's formula, defined for 1752-09-14 ..= 9999-12-31.

use cd_core::errors::{Error, Result};

use crate::date::CalendarDate;
use crate::weekday::Weekday;

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// JDN of 0001-01-01.
pub const MIN_JDN: i64 = 1_721_426;

/// JDN of 9999-12-31.
pub const MAX_JDN: i64 = 5_373_484;

/// First date (inclusive) for which Sakamoto's weekday formula is used.
pub const SAKAMOTO_FIRST_DATE: (i32, u8, u8) = (1752, 9, 14);

/// Sakamoto's month offsets.
const SAKAMOTO_T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a given month/year; 0 for a month outside 1–12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Check that `(year, month, day)` is a real date in the supported range.
pub fn validate_ymd(year: i32, month: u8, day: u8) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidDate(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidDate(format!(
            "month {month} out of range [1, 12]"
        )));
    }
    let days_in = days_in_month(year, month);
    if day == 0 || day > days_in {
        return Err(Error::InvalidDate(format!(
            "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
        )));
    }
    Ok(())
}

/// Convert a Gregorian date to its Julian Day Number.
///
/// # Errors
/// [`Error::InvalidDate`] if the parts do not form a valid date.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Result<i64> {
    validate_ymd(year, month, day)?;
    Ok(jdn_from_ymd(year, month, day))
}

/// Unchecked Gregorian → JDN.
pub(crate) fn jdn_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let (mut z, mut m) = (i64::from(year), i64::from(month));
    if m < 3 {
        m += 12;
        z -= 1;
    }
    i64::from(day) + (153 * m - 457) / 5 + 365 * z + z.div_euclid(4) - z.div_euclid(100)
        + z.div_euclid(400)
        + 1_721_119
}

/// Convert a Julian Day Number back to a Gregorian date.
///
/// The returned date carries the JDN in its cache.
///
/// # Errors
/// [`Error::JdnOutOfRange`] outside 0001-01-01 ..= 9999-12-31.
pub fn jdn_to_gregorian(jdn: i64) -> Result<CalendarDate> {
    if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
        return Err(Error::JdnOutOfRange(jdn));
    }
    let (y, m, d) = ymd_from_jdn(jdn);
    Ok(CalendarDate::from_parts(y, m, d).with_jdn(jdn))
}

/// Meeus' decomposition, integer form.
fn ymd_from_jdn(z: i64) -> (i32, u8, u8) {
    let alpha = (4 * z - 7_468_865).div_euclid(146_097);
    let a = z + 1 + alpha - alpha.div_euclid(4);
    let b = a + 1524;
    let c = (20 * b - 2442).div_euclid(7305);
    let d = (1461 * c).div_euclid(4);
    let e = (10_000 * (b - d)).div_euclid(306_001);

    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year as i32, month as u8, day as u8)
}

/// Whether a date is inside the window where [`weekday_of`] is defined.
pub fn in_sakamoto_window(date: &CalendarDate) -> bool {
    (date.year(), date.month(), date.day()) >= SAKAMOTO_FIRST_DATE
        && date.year() <= MAX_YEAR
}

/// Weekday of a date by Sakamoto's formula.
///
/// Uses the date's cached weekday when present.
///
/// # Errors
/// [`Error::WeekdayOutOfRange`] for dates before 1752-09-14.
pub fn weekday_of(date: &CalendarDate) -> Result<Weekday> {
    if !in_sakamoto_window(date) {
        return Err(date.weekday_range_error());
    }
    if let Some(w) = date.cached_weekday() {
        return Ok(w);
    }
    let month = usize::from(date.month());
    let y = date.year() - i32::from(month < 3);
    let index = (y + y / 4 - y / 100 + y / 400 + SAKAMOTO_T[month - 1] + i32::from(date.day())) % 7;
    Ok(Weekday::ALL[index as usize])
}

/// Weekday of a Julian Day Number.  Defined for every JDN, unlike
/// [`weekday_of`]; used for internal arithmetic.
pub fn weekday_from_jdn(jdn: i64) -> Weekday {
    Weekday::ALL[(jdn + 1).rem_euclid(7) as usize]
}

/// Calendar days from `d1` to `d2`; positive when `d2` is later.
pub fn days_between(d1: &CalendarDate, d2: &CalendarDate) -> i64 {
    d2.jdn() - d1.jdn()
}

/// The date `n` calendar days after `date` (before, for negative `n`).
///
/// # Errors
/// [`Error::JdnOutOfRange`] if the result leaves the supported range.
pub fn offset_by_days(date: &CalendarDate, n: i64) -> Result<CalendarDate> {
    let jdn = date
        .jdn()
        .checked_add(n)
        .ok_or(Error::JdnOutOfRange(date.jdn().saturating_add(n)))?;
    jdn_to_gregorian(jdn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn known_jdns() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), Ok(2_451_545));
        assert_eq!(gregorian_to_jdn(1, 1, 1), Ok(MIN_JDN));
        assert_eq!(gregorian_to_jdn(9999, 12, 31), Ok(MAX_JDN));
        assert_eq!(gregorian_to_jdn(1752, 9, 14), Ok(2_361_222));
        assert_eq!(gregorian_to_jdn(1582, 10, 15), Ok(2_299_161));
    }

    #[test]
    fn invalid_parts_are_rejected() {
        assert!(matches!(
            gregorian_to_jdn(2011, 2, 30),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            gregorian_to_jdn(2011, 0, 1),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn inverse_at_edges() {
        for (y, m, d) in [
            (1, 1, 1),
            (1, 3, 1),
            (4, 2, 29),
            (1582, 10, 4),
            (1582, 10, 15),
            (1600, 2, 29),
            (1752, 9, 2),
            (1752, 9, 14),
            (1900, 3, 1),
            (2000, 2, 29),
            (2011, 11, 24),
            (9999, 12, 31),
        ] {
            let jdn = gregorian_to_jdn(y, m, d).unwrap();
            let back = jdn_to_gregorian(jdn).unwrap();
            assert_eq!(back, date(y, m, d), "round trip failed for {y}-{m}-{d}");
            assert_eq!(back.cached_jdn(), Some(jdn));
        }
    }

    #[test]
    fn jdn_out_of_range() {
        assert_eq!(
            jdn_to_gregorian(MIN_JDN - 1),
            Err(Error::JdnOutOfRange(MIN_JDN - 1))
        );
        assert!(jdn_to_gregorian(MAX_JDN + 1).is_err());
        assert!(offset_by_days(&CalendarDate::MAX, 1).is_err());
    }

    #[test]
    fn huge_offsets_are_range_errors() {
        let d = date(2011, 10, 8);
        assert_eq!(offset_by_days(&d, i64::MAX), Err(Error::JdnOutOfRange(i64::MAX)));
        assert_eq!(offset_by_days(&d, i64::MIN), Err(Error::JdnOutOfRange(d.jdn() + i64::MIN)));
        assert_eq!(
            offset_by_days(&CalendarDate::MAX, i64::MAX),
            Err(Error::JdnOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1700));
        assert!(!is_leap_year(1800));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(2011));
    }

    #[test]
    fn sakamoto_known_values() {
        assert_eq!(weekday_of(&date(2000, 1, 1)), Ok(Weekday::Saturday));
        assert_eq!(weekday_of(&date(1957, 10, 4)), Ok(Weekday::Friday));
        assert_eq!(weekday_of(&date(2011, 11, 24)), Ok(Weekday::Thursday));
        assert_eq!(weekday_of(&date(1752, 9, 14)), Ok(Weekday::Thursday));
        assert_eq!(weekday_of(&date(9999, 12, 31)), Ok(Weekday::Friday));
    }

    #[test]
    fn sakamoto_window_is_enforced() {
        assert_eq!(
            weekday_of(&date(1752, 9, 1)),
            Err(Error::WeekdayOutOfRange {
                year: 1752,
                month: 9,
                day: 1
            })
        );
        assert!(weekday_of(&date(1752, 9, 13)).is_err());
        assert!(weekday_of(&date(1000, 6, 1)).is_err());
    }

    #[test]
    fn jdn_weekday_agrees_with_sakamoto() {
        let mut d = date(2011, 1, 1);
        for _ in 0..800 {
            assert_eq!(weekday_of(&d).unwrap(), weekday_from_jdn(d.jdn()));
            d = offset_by_days(&d, 1).unwrap();
        }
    }

    #[test]
    fn differences_and_offsets() {
        let a = date(2011, 10, 8);
        let b = date(2011, 11, 24);
        assert_eq!(days_between(&a, &b), 47);
        assert_eq!(days_between(&b, &a), -47);
        assert_eq!(offset_by_days(&a, 47).unwrap(), b);
        assert_eq!(offset_by_days(&b, -47).unwrap(), a);
        assert_eq!(offset_by_days(&date(2012, 2, 28), 1).unwrap(), date(2012, 2, 29));
        assert_eq!(offset_by_days(&date(2011, 12, 31), 1).unwrap(), date(2012, 1, 1));
    }
}
