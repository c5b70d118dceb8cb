//! Deadlines counted from a trigger date.
//!
//! A deadline is a signed count of calendar or court days from a trigger
//! date (the trigger itself is excluded), followed by an adjustment of the
//! landing day onto a court day.

use std::str::FromStr;

use cd_core::errors::{Error, Result};

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::CourtCalendar;
use crate::date::CalendarDate;
use crate::julian;

/// What a deadline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountUnit {
    /// Every calendar day counts.
    #[default]
    CalendarDays,
    /// Only court days count.
    CourtDays,
}

impl std::fmt::Display for CountUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountUnit::CalendarDays => f.write_str("calendar days"),
            CountUnit::CourtDays => f.write_str("court days"),
        }
    }
}

impl FromStr for CountUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" | "calendar days" | "calendar-days" | "days" => Ok(CountUnit::CalendarDays),
            "court" | "court days" | "court-days" => Ok(CountUnit::CourtDays),
            _ => Err(Error::Parse(format!("unknown count unit {s:?}"))),
        }
    }
}

/// A deadline rule: count `count` units from the trigger, then move the
/// landing day with `landing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeadlineRule {
    /// Signed number of units; negative counts backwards.
    pub count: i64,
    /// Calendar or court days.
    pub unit: CountUnit,
    /// Adjustment applied when the landing day is not a court day.
    pub landing: BusinessDayConvention,
}

impl DeadlineRule {
    /// `count` calendar days, extended to the next court day (or moved to the
    /// previous one for a backwards count).
    pub fn calendar_days(count: i64) -> Self {
        Self {
            count,
            unit: CountUnit::CalendarDays,
            landing: Self::default_landing(count),
        }
    }

    /// `count` court days.
    pub fn court_days(count: i64) -> Self {
        Self {
            count,
            unit: CountUnit::CourtDays,
            landing: Self::default_landing(count),
        }
    }

    /// Replace the landing-day convention.
    pub fn with_landing(mut self, landing: BusinessDayConvention) -> Self {
        self.landing = landing;
        self
    }

    fn default_landing(count: i64) -> BusinessDayConvention {
        if count < 0 {
            BusinessDayConvention::Preceding
        } else {
            BusinessDayConvention::Following
        }
    }

    /// Compute the deadline for `trigger` on `calendar`.
    ///
    /// # Errors
    /// Propagates range and classification errors from the date walk.
    pub fn compute<C: CourtCalendar + ?Sized>(
        &self,
        trigger: &CalendarDate,
        calendar: &C,
    ) -> Result<Deadline> {
        let landing_day = match self.unit {
            CountUnit::CalendarDays => julian::offset_by_days(trigger, self.count)?,
            CountUnit::CourtDays => calendar.offset_by_court_days(trigger, self.count)?,
        };
        let due_date = calendar.adjust(&landing_day, self.landing)?;
        Ok(Deadline {
            trigger: *trigger,
            landing_day,
            due_date,
            extended: due_date != landing_day,
        })
    }
}

impl std::fmt::Display for DeadlineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.count, self.unit, self.landing)
    }
}

/// A computed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// The date counted from.
    pub trigger: CalendarDate,
    /// The date reached by counting, before adjustment.
    pub landing_day: CalendarDate,
    /// The date the deadline falls due.
    pub due_date: CalendarDate,
    /// Whether the landing day was moved.
    pub extended: bool,
}
