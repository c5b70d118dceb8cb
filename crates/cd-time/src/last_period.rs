//! Last-week-of-month classification.
//!
//! Both tests short-circuit on day-of-month below 22: every month has at
//! least 28 days, so the final occurrence of any weekday, and every day of
//! the final seven, falls on day 22 or later.

use crate::date::CalendarDate;
use crate::julian;
use crate::weekday::Weekday;

/// First day-of-month that can be in the last week of any month.
pub const LAST_WEEK_FIRST_DAY: u8 = 22;

/// Days in a week.
pub const WEEKDAYS: u8 = 7;

/// Whether `date` is the last occurrence of its weekday in its month
/// (e.g. the last Monday of May).
///
/// Steps back from the first day of the following month to the last day
/// with `date`'s weekday and compares.  The following month is handled as a
/// JDN so that December 9999 needs no out-of-range date.
pub fn is_last_weekday_occurrence(date: &CalendarDate) -> bool {
    if date.day() < LAST_WEEK_FIRST_DAY {
        return false;
    }
    let jdn = date.jdn();
    let weekday = date
        .cached_weekday()
        .unwrap_or_else(|| julian::weekday_from_jdn(jdn));
    let next_month_first = date.end_of_month().jdn() + 1;
    let next_weekday = julian::weekday_from_jdn(next_month_first);
    let back = match weekday.days_until(next_weekday) {
        0 => WEEKDAYS,
        n => n,
    };
    next_month_first - i64::from(back) == jdn
}

/// Whether `date` lies in the final seven-day span of its month, i.e. fewer
/// than seven days before the month's last day.
///
/// A date exactly seven days before month end is not in the last week.
pub fn is_in_last_week(date: &CalendarDate) -> bool {
    if date.day() < LAST_WEEK_FIRST_DAY {
        return false;
    }
    let month_end = date.end_of_month();
    if date.day() == month_end.day() {
        return true;
    }
    julian::days_between(date, &month_end) < i64::from(WEEKDAYS)
}

/// Whether `date` lies in the same calendar-grid week as the last day of its
/// month, with weeks starting on `week_start`.
///
/// This is the weekday-ordering reading of "last week": with Sunday-start
/// weeks and a month ending on a Tuesday, only the Sunday, Monday, and
/// Tuesday of that row qualify.
pub fn is_in_last_calendar_week(date: &CalendarDate, week_start: Weekday) -> bool {
    let month_end = date.end_of_month();
    let end_weekday = julian::weekday_from_jdn(month_end.jdn());
    let row_start = month_end.day() - week_start.days_until(end_weekday);
    date.day() >= row_start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn last_thursday_of_november_2011() {
        // November 2011: Thursdays fall on 3, 10, 17, 24.
        assert!(is_last_weekday_occurrence(&date(2011, 11, 24)));
        assert!(!is_last_weekday_occurrence(&date(2011, 11, 17)));
        // Wednesday the 30th is the last Wednesday; Tuesday the 29th the last Tuesday.
        assert!(is_last_weekday_occurrence(&date(2011, 11, 30)));
        assert!(is_last_weekday_occurrence(&date(2011, 11, 29)));
        // Wednesday the 23rd is not.
        assert!(!is_last_weekday_occurrence(&date(2011, 11, 23)));
    }

    #[test]
    fn last_monday_of_may() {
        assert!(is_last_weekday_occurrence(&date(2011, 5, 30)));
        assert!(!is_last_weekday_occurrence(&date(2011, 5, 23)));
        assert!(is_last_weekday_occurrence(&date(2012, 5, 28)));
    }

    #[test]
    fn next_month_starts_on_same_weekday() {
        // 2011-10-01 is a Saturday, so the last Saturday of September is the 24th.
        assert!(is_last_weekday_occurrence(&date(2011, 9, 24)));
        assert!(!is_last_weekday_occurrence(&date(2011, 9, 17)));
    }

    #[test]
    fn december_and_year_end() {
        assert!(is_last_weekday_occurrence(&date(2011, 12, 31)));
        assert!(is_last_weekday_occurrence(&date(9999, 12, 31)));
        assert!(is_last_weekday_occurrence(&date(9999, 12, 25)));
        assert!(!is_last_weekday_occurrence(&date(9999, 12, 24)));
    }

    #[test]
    fn early_days_short_circuit() {
        assert!(!is_last_weekday_occurrence(&date(2011, 2, 21)));
        assert!(!is_in_last_week(&date(2011, 2, 21)));
    }

    #[test]
    fn last_week_span() {
        // 31-day month: the final seven days are 25..=31.
        assert!(is_in_last_week(&date(2011, 10, 31)));
        assert!(is_in_last_week(&date(2011, 10, 25)));
        assert!(!is_in_last_week(&date(2011, 10, 24)));
        // February 2011 has 28 days: every day from the 22nd qualifies.
        assert!(is_in_last_week(&date(2011, 2, 22)));
        // Leap February: the 22nd is exactly seven days before the 29th.
        assert!(!is_in_last_week(&date(2012, 2, 22)));
        assert!(is_in_last_week(&date(2012, 2, 23)));
    }

    #[test]
    fn last_week_boundary_is_exclusive_at_seven_days() {
        let d = date(2011, 11, 23);
        assert_eq!(julian::days_between(&d, &d.end_of_month()), 7);
        assert!(!is_in_last_week(&d));
        assert!(is_in_last_week(&date(2011, 11, 24)));
    }

    #[test]
    fn last_calendar_week_sunday_start() {
        // November 2011 ends on Wednesday the 30th; that row starts Sunday the 27th.
        assert!(is_in_last_calendar_week(&date(2011, 11, 27), Weekday::Sunday));
        assert!(is_in_last_calendar_week(&date(2011, 11, 30), Weekday::Sunday));
        assert!(!is_in_last_calendar_week(&date(2011, 11, 26), Weekday::Sunday));
        // Monday-start weeks: the row starts Monday the 28th.
        assert!(!is_in_last_calendar_week(&date(2011, 11, 27), Weekday::Monday));
        assert!(is_in_last_calendar_week(&date(2011, 11, 28), Weekday::Monday));
    }

    #[test]
    fn last_calendar_week_when_month_ends_on_week_end() {
        // December 2011 ends on Saturday the 31st: the whole row 25..=31 qualifies.
        assert!(is_in_last_calendar_week(&date(2011, 12, 25), Weekday::Sunday));
        assert!(!is_in_last_calendar_week(&date(2011, 12, 24), Weekday::Sunday));
    }
}
