//! Holiday matching against a [`HolidayRuleTable`].
//!
//! A date is tested against the all-months bucket first, then against its
//! own month's bucket.  The first matching rule wins.

use crate::date::CalendarDate;
use crate::last_period;
use crate::rule::{HolidayRule, MonthKey, Occurrence, RuleKind};
use crate::rule_table::HolidayRuleTable;
use crate::weekday::Weekday;

/// Classification of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus<'a> {
    /// A court day.
    CourtDay,
    /// A holiday, with the first rule that matched.
    Holiday(&'a HolidayRule),
    /// A weekend day on a calendar with no explicit weekend rules.
    Weekend,
    /// The weekday cannot be determined (before 1752-09-14), so weekday
    /// rules cannot be evaluated.
    Unknown,
}

impl DayStatus<'_> {
    /// Whether this is [`DayStatus::CourtDay`].
    pub fn is_court_day(&self) -> bool {
        matches!(self, DayStatus::CourtDay)
    }

    /// Whether the date is known not to be a court day.
    pub fn is_closed(&self) -> bool {
        matches!(self, DayStatus::Holiday(_) | DayStatus::Weekend)
    }
}

/// Whether `rule` selects `date`, given the date's weekday.
pub fn rule_matches(date: &CalendarDate, weekday: Weekday, rule: &HolidayRule) -> bool {
    match *rule.kind() {
        RuleKind::Fixed { day } => date.day() == day,
        RuleKind::RecurringWeekday { weekday: w } => weekday == w,
        RuleKind::Relative {
            weekday: w,
            occurrence,
        } => {
            weekday == w
                && match occurrence {
                    Occurrence::Last => last_period::is_last_weekday_occurrence(date),
                    nth => nth.contains_day(date.day()),
                }
        }
    }
}

/// Classify `date` against `table`.
pub fn day_status<'a>(date: &CalendarDate, table: &'a HolidayRuleTable) -> DayStatus<'a> {
    let Ok(weekday) = date.weekday() else {
        return DayStatus::Unknown;
    };
    let month_rules = table.rules_for(MonthKey::Month(date.month_of_year()));
    table
        .all_months()
        .iter()
        .chain(month_rules)
        .find(|rule| rule_matches(date, weekday, rule))
        .map_or(DayStatus::CourtDay, DayStatus::Holiday)
}

/// The first rule that makes `date` a holiday, if any.
pub fn matching_rule<'a>(
    date: &CalendarDate,
    table: &'a HolidayRuleTable,
) -> Option<&'a HolidayRule> {
    match day_status(date, table) {
        DayStatus::Holiday(rule) => Some(rule),
        _ => None,
    }
}

/// Whether `date` is a holiday under `table`.
///
/// Returns `false` when the weekday cannot be determined.
pub fn is_holiday(date: &CalendarDate, table: &HolidayRuleTable) -> bool {
    matching_rule(date, table).is_some()
}

/// Whether `date` is a court day under `table`.
///
/// Returns `false` when the weekday cannot be determined.
pub fn is_court_day(date: &CalendarDate, table: &HolidayRuleTable) -> bool {
    day_status(date, table).is_court_day()
}
