//! # courtdays
//!
//! Court-day and Julian-date calculus for legal deadline scheduling.
//!
//! This crate is a façade over the workspace crates plus the `courtdays`
//! command-line tool.  Application code should depend on this crate rather
//! than the individual `cd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use courtdays::time::{CalendarDate, CourtCalendar, HolidayRule, HolidayRuleTable};
//! use courtdays::time::{Month, MonthKey, Weekday};
//!
//! let table = HolidayRuleTable::build(vec![
//!     HolidayRule::recurring(MonthKey::AllMonths, Weekday::Saturday, "Weekend", ""),
//!     HolidayRule::recurring(MonthKey::AllMonths, Weekday::Sunday, "Weekend", ""),
//!     HolidayRule::fixed(Month::November, 11, "Veterans Day", "").unwrap(),
//! ]);
//! let thursday = CalendarDate::new(2011, 11, 10).unwrap();
//! let next = table.next_court_day(&thursday).unwrap();
//! assert_eq!(next, CalendarDate::new(2011, 11, 14).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, and date text helpers.
pub use cd_core as core;

/// Dates, holiday rules, and court calendars.
pub use cd_time as time;

/// CSV rule-file loading.
pub use cd_loader as loader;

/// Command-line front end.
pub mod cli;

/// CLI error type.
pub mod error;

/// Log subscriber installation.
pub mod logging;

pub use error::CliError;
