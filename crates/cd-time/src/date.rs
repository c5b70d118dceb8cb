//! `CalendarDate`: a validated proleptic-Gregorian date.
//!
//! A date is identified by `(year, month, day)` alone.  The weekday and the
//! Julian Day Number are optional caches: they may be attached when known
//! and are recomputed on demand when absent.  Equality, ordering, and
//! hashing ignore them.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use cd_core::errors::{Error, Result};
use cd_core::utilities::{format_ymd, parse_date_any, DateFormat};

use crate::julian::{self, MAX_YEAR, MIN_YEAR};
use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date in the range 0001-01-01 ..= 9999-12-31.
#[derive(Clone, Copy)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    weekday: Option<Weekday>,
    jdn: Option<i64>,
}

impl CalendarDate {
    /// Earliest supported date.
    pub const MIN: CalendarDate = CalendarDate::from_parts(MIN_YEAR, 1, 1);

    /// Latest supported date.
    pub const MAX: CalendarDate = CalendarDate::from_parts(MAX_YEAR, 12, 31);

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] when the year is outside 1–9999, the month is
    /// outside 1–12, or the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        julian::validate_ymd(year, month, day)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Build without validation.  Callers guarantee the parts are valid.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            weekday: None,
            jdn: None,
        }
    }

    pub(crate) fn with_jdn(mut self, jdn: i64) -> Self {
        debug_assert_eq!(jdn, julian::jdn_from_ymd(self.year, self.month, self.day));
        self.jdn = Some(jdn);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The year (1–9999).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as an enum.
    pub fn month_of_year(&self) -> Month {
        Month::ALL[usize::from(self.month) - 1]
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The cached weekday, if one has been attached.
    pub fn cached_weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    /// The cached Julian Day Number, if one has been attached.
    pub fn cached_jdn(&self) -> Option<i64> {
        self.jdn
    }

    /// The Julian Day Number, from the cache or computed.
    pub fn jdn(&self) -> i64 {
        self.jdn
            .unwrap_or_else(|| julian::jdn_from_ymd(self.year, self.month, self.day))
    }

    /// The weekday, from the cache or via [`julian::weekday_of`].
    ///
    /// # Errors
    /// [`Error::WeekdayOutOfRange`] before 1752-09-14.
    pub fn weekday(&self) -> Result<Weekday> {
        julian::weekday_of(self)
    }

    /// Return a copy with both caches filled in.  The weekday is attached only
    /// when the date lies in the range where it is defined.
    pub fn resolved(mut self) -> Self {
        self.jdn = Some(self.jdn());
        self.weekday = julian::weekday_of(&self).ok();
        self
    }

    /// Whether the date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        julian::is_leap_year(self.year)
    }

    /// Number of days in the date's month.
    pub fn days_in_month(&self) -> u8 {
        julian::days_in_month(self.year, self.month)
    }

    /// The first day of the date's month.
    pub fn first_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, 1)
    }

    /// The last day of the date's month.
    pub fn end_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, self.days_in_month())
    }

    /// Render the date in the given style.
    pub fn format(&self, format: DateFormat) -> String {
        format_ymd(self.year, self.month, self.day, format)
    }

    pub(crate) fn weekday_range_error(&self) -> Error {
        Error::WeekdayOutOfRange {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    fn key(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

// ── Identity ignores the caches ───────────────────────────────────────────────

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DateFormat::Iso))
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({})", self.format(DateFormat::Iso))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Accepts `YYYY-MM-DD` or `MM/DD/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_date_any(s)?;
        Self::new(y, m, d)
    }
}
