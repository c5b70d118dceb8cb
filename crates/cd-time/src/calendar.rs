//! `CourtCalendar` trait and the built-in calendars.
//!
//! A court calendar classifies each date; counting, offsetting, and
//! landing-day adjustment are provided on top of that classification.

use cd_core::errors::Result;
use tracing::trace;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::CalendarDate;
use crate::julian;
use crate::matcher::{self, DayStatus};
use crate::rule_table::HolidayRuleTable;

/// A calendar of court days.
pub trait CourtCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Classify `date`.
    fn day_status(&self, date: &CalendarDate) -> DayStatus<'_>;

    /// Return `true` if `date` is a court day.
    fn is_court_day(&self, date: &CalendarDate) -> bool {
        self.day_status(date).is_court_day()
    }

    /// Return `true` if `date` is known to be closed (holiday or weekend).
    /// `false` when the date cannot be classified.
    fn is_holiday(&self, date: &CalendarDate) -> bool {
        self.day_status(date).is_closed()
    }

    /// The date `n` court days after `date` (before, for negative `n`).
    ///
    /// `date` itself is never counted; for `n == 0` it is returned unchanged
    /// even when it is not a court day.
    ///
    /// # Errors
    /// [`Error::WeekdayOutOfRange`](cd_core::Error::WeekdayOutOfRange) if the
    /// walk reaches a date that cannot be classified, and
    /// [`Error::JdnOutOfRange`](cd_core::Error::JdnOutOfRange) if it leaves
    /// the supported date range.
    fn offset_by_court_days(&self, date: &CalendarDate, n: i64) -> Result<CalendarDate> {
        if n == 0 {
            return Ok(*date);
        }
        let step = n.signum();
        let mut remaining = n.unsigned_abs();
        let mut jdn = date.jdn();
        loop {
            jdn += step;
            let candidate = julian::jdn_to_gregorian(jdn)?;
            if court_day_status(self, &candidate)? {
                remaining -= 1;
                if remaining == 0 {
                    trace!(
                        calendar = self.name(),
                        %date,
                        n,
                        result = %candidate,
                        "court-day offset"
                    );
                    return Ok(candidate);
                }
            }
        }
    }

    /// Signed count of court days from `d1` to `d2`; positive when `d2` is
    /// later.
    ///
    /// Days strictly between the two count when they are court days.  `d2`
    /// always counts and `d1` never does, so
    /// `court_days_between(d, offset_by_court_days(d, n)) == n` and swapping
    /// the arguments negates the result.
    ///
    /// # Errors
    /// [`Error::WeekdayOutOfRange`](cd_core::Error::WeekdayOutOfRange) if an
    /// interior date cannot be classified.
    fn court_days_between(&self, d1: &CalendarDate, d2: &CalendarDate) -> Result<i64> {
        let (from, to) = (d1.jdn(), d2.jdn());
        if from == to {
            return Ok(0);
        }
        let step = (to - from).signum();
        let mut count = 1;
        let mut jdn = from + step;
        while jdn != to {
            let interior = julian::jdn_to_gregorian(jdn)?;
            if court_day_status(self, &interior)? {
                count += 1;
            }
            jdn += step;
        }
        let signed = step * count;
        trace!(calendar = self.name(), %d1, %d2, count = signed, "court days between");
        Ok(signed)
    }

    /// Move `date` onto a court day according to `convention`.
    ///
    /// # Errors
    /// As for [`offset_by_court_days`](Self::offset_by_court_days).
    fn adjust(
        &self,
        date: &CalendarDate,
        convention: BusinessDayConvention,
    ) -> Result<CalendarDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(*date),
            BusinessDayConvention::Following => roll(self, date, 1),
            BusinessDayConvention::Preceding => roll(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(self, date, 1)?;
                if adjusted.month() != date.month() || adjusted.year() != date.year() {
                    roll(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(self, date, -1)?;
                if adjusted.month() != date.month() || adjusted.year() != date.year() {
                    roll(self, date, 1)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// The first court day after `date`.
    fn next_court_day(&self, date: &CalendarDate) -> Result<CalendarDate> {
        self.offset_by_court_days(date, 1)
    }

    /// The last court day before `date`.
    fn previous_court_day(&self, date: &CalendarDate) -> Result<CalendarDate> {
        self.offset_by_court_days(date, -1)
    }

    /// Court days in `[from, to]`, in order.  Empty when `from > to`.
    fn court_days_in_range(
        &self,
        from: &CalendarDate,
        to: &CalendarDate,
    ) -> Result<Vec<CalendarDate>> {
        let mut days = Vec::new();
        for jdn in from.jdn()..=to.jdn() {
            let date = julian::jdn_to_gregorian(jdn)?;
            if court_day_status(self, &date)? {
                days.push(date);
            }
        }
        Ok(days)
    }
}

/// `true` for a court day, `false` for a closed day, an error when the date
/// cannot be classified.
fn court_day_status<C: CourtCalendar + ?Sized>(calendar: &C, date: &CalendarDate) -> Result<bool> {
    match calendar.day_status(date) {
        DayStatus::CourtDay => Ok(true),
        DayStatus::Holiday(_) | DayStatus::Weekend => Ok(false),
        DayStatus::Unknown => Err(date.weekday_range_error()),
    }
}

/// Step from `date` (inclusive) in direction `step` to the first court day.
fn roll<C: CourtCalendar + ?Sized>(
    calendar: &C,
    date: &CalendarDate,
    step: i64,
) -> Result<CalendarDate> {
    let mut current = *date;
    while !court_day_status(calendar, &current)? {
        current = julian::offset_by_days(&current, step)?;
    }
    Ok(current)
}

impl CourtCalendar for HolidayRuleTable {
    fn name(&self) -> &str {
        HolidayRuleTable::name(self)
    }

    fn day_status(&self, date: &CalendarDate) -> DayStatus<'_> {
        matcher::day_status(date, self)
    }
}

/// A calendar on which every day is a court day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl CourtCalendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn day_status(&self, _date: &CalendarDate) -> DayStatus<'_> {
        DayStatus::CourtDay
    }
}

/// A calendar closed on Saturdays and Sundays only.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl CourtCalendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn day_status(&self, date: &CalendarDate) -> DayStatus<'_> {
        match date.weekday() {
            Ok(w) if w.is_weekend() => DayStatus::Weekend,
            Ok(_) => DayStatus::CourtDay,
            Err(_) => DayStatus::Unknown,
        }
    }
}
