//! Holiday rules.
//!
//! A rule names a set of days in one month (or in every month): a fixed
//! day-of-month, the n-th or last occurrence of a weekday, or every
//! occurrence of a weekday.

use cd_core::errors::{Error, Result};
use cd_core::utilities::format_ordinal;

use crate::month::Month;
use crate::weekday::Weekday;

/// Number of month buckets: the all-months bucket plus January–December.
pub const MONTH_BUCKETS: usize = 13;

/// Which month a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthKey {
    /// Every month (key 0).
    AllMonths,
    /// A single month (keys 1–12).
    Month(Month),
}

impl MonthKey {
    /// Decode a numeric key: 0 is all months, 1–12 a month.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MonthKey::AllMonths),
            n => Month::from_number(n).map(MonthKey::Month),
        }
    }

    /// The numeric key (0–12).
    pub fn code(&self) -> u8 {
        match self {
            MonthKey::AllMonths => 0,
            MonthKey::Month(m) => m.number(),
        }
    }

    /// Bucket index in a rule table.
    pub fn index(&self) -> usize {
        usize::from(self.code())
    }
}

impl From<Month> for MonthKey {
    fn from(m: Month) -> Self {
        MonthKey::Month(m)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthKey::AllMonths => f.write_str("All months"),
            MonthKey::Month(m) => write!(f, "{m}"),
        }
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// The n-th occurrence.  Only 1–4 can ever match.
    Nth(u8),
    /// The last occurrence.
    Last,
}

impl Occurrence {
    /// Whether `day` is in the seven-day window of the n-th occurrence.
    /// Always false for [`Occurrence::Last`]; that case needs the whole date.
    pub fn contains_day(&self, day: u8) -> bool {
        match *self {
            Occurrence::Nth(n @ 1..=4) => {
                let first = (n - 1) * 7 + 1;
                (first..first + 7).contains(&day)
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occurrence::Nth(n) => f.write_str(&format_ordinal(u32::from(*n))),
            Occurrence::Last => f.write_str("last"),
        }
    }
}

/// How a rule selects days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A fixed day-of-month.
    Fixed {
        /// Day of the month (1–31).
        day: u8,
    },
    /// An occurrence of a weekday (e.g. the 4th Thursday).
    Relative {
        /// The weekday.
        weekday: Weekday,
        /// Which occurrence.
        occurrence: Occurrence,
    },
    /// Every occurrence of a weekday (e.g. every Saturday).
    RecurringWeekday {
        /// The weekday.
        weekday: Weekday,
    },
}

/// A named holiday rule with the authority that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    month: MonthKey,
    kind: RuleKind,
    name: String,
    authority: String,
}

impl HolidayRule {
    /// Create a rule.  See [`HolidayRule::validate`] for the checks applied
    /// by the checked constructors.
    pub fn new(
        month: MonthKey,
        kind: RuleKind,
        name: impl Into<String>,
        authority: impl Into<String>,
    ) -> Self {
        Self {
            month,
            kind,
            name: name.into(),
            authority: authority.into(),
        }
    }

    /// A fixed-date rule, e.g. July 4.
    ///
    /// # Errors
    /// [`Error::InvalidRule`] if `day` is outside 1–31.
    pub fn fixed(
        month: impl Into<MonthKey>,
        day: u8,
        name: impl Into<String>,
        authority: impl Into<String>,
    ) -> Result<Self> {
        let rule = Self::new(month.into(), RuleKind::Fixed { day }, name, authority);
        rule.validate()?;
        Ok(rule)
    }

    /// A weekday-occurrence rule, e.g. the 4th Thursday of November.
    pub fn relative(
        month: impl Into<MonthKey>,
        weekday: Weekday,
        occurrence: Occurrence,
        name: impl Into<String>,
        authority: impl Into<String>,
    ) -> Self {
        Self::new(
            month.into(),
            RuleKind::Relative {
                weekday,
                occurrence,
            },
            name,
            authority,
        )
    }

    /// A rule matching every `weekday` of the month (or of every month).
    pub fn recurring(
        month: impl Into<MonthKey>,
        weekday: Weekday,
        name: impl Into<String>,
        authority: impl Into<String>,
    ) -> Self {
        Self::new(
            month.into(),
            RuleKind::RecurringWeekday { weekday },
            name,
            authority,
        )
    }

    /// Check the rule's parameters.
    ///
    /// Fixed days must be 1–31.  The day is not checked against the month's
    /// length: a rule for February 30 is accepted and never matches.
    ///
    /// # Errors
    /// [`Error::InvalidRule`] naming the rule.
    pub fn validate(&self) -> Result<()> {
        if let RuleKind::Fixed { day } = self.kind {
            if !(1..=31).contains(&day) {
                return Err(Error::InvalidRule(format!(
                    "{}: fixed day {day} out of range [1, 31]",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// The month key.
    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// The selection rule.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaring authority (statute, court rule, …).
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// A short description of which days the rule selects.
    pub fn description(&self) -> String {
        let scope = match self.month {
            MonthKey::AllMonths => "every month".to_string(),
            MonthKey::Month(m) => m.long_name().to_string(),
        };
        match self.kind {
            RuleKind::Fixed { day } => match self.month {
                MonthKey::AllMonths => {
                    format!("the {} of every month", format_ordinal(u32::from(day)))
                }
                MonthKey::Month(m) => format!("{} {day}", m.long_name()),
            },
            RuleKind::Relative {
                weekday,
                occurrence,
            } => format!("{occurrence} {weekday} of {scope}"),
            RuleKind::RecurringWeekday { weekday } => format!("every {weekday} of {scope}"),
        }
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description())?;
        if !self.authority.is_empty() {
            write!(f, " ({})", self.authority)?;
        }
        Ok(())
    }
}
