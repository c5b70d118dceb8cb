//! # cd-time
//!
//! Date arithmetic on Julian Day Numbers, holiday rules, and court-day
//! calendars.
//!
//! ```
//! use cd_time::{CalendarDate, CourtCalendar, WeekendsOnly};
//!
//! let friday = CalendarDate::new(2011, 10, 7).unwrap();
//! let monday = WeekendsOnly.next_court_day(&friday).unwrap();
//! assert_eq!(monday, CalendarDate::new(2011, 10, 10).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Landing-day adjustment conventions.
pub mod business_day_convention;

/// `CourtCalendar` trait and built-in calendars.
pub mod calendar;

/// `CalendarDate` type.
pub mod date;

/// Deadlines counted in calendar or court days.
pub mod deadline;

/// Gregorian ↔ Julian Day Number conversion and weekday derivation.
pub mod julian;

/// Last-week-of-month tests.
pub mod last_period;

/// Holiday classification of single dates.
pub mod matcher;

/// `Month`: month of the year.
pub mod month;

/// Holiday rule definitions.
pub mod rule;

/// `HolidayRuleTable`: rules bucketed by month.
pub mod rule_table;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{CourtCalendar, NullCalendar, WeekendsOnly};
pub use date::CalendarDate;
pub use deadline::{CountUnit, Deadline, DeadlineRule};
pub use matcher::DayStatus;
pub use month::Month;
pub use rule::{HolidayRule, MonthKey, Occurrence, RuleKind};
pub use rule_table::HolidayRuleTable;
pub use weekday::Weekday;
