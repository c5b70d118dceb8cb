//! Command-line front end.
//!
//! [`Invocation`] is the `clap` definition of the argument list; [`run`]
//! executes its [`Command`] against the settings and writes the result.

use std::io::Write;
use std::path::{Path, PathBuf};

use cd_core::utilities::parse_day_count;
use cd_core::{ensure, Settings};
use cd_loader::RuleLoader;
use cd_time::julian::{self, MAX_YEAR, MIN_YEAR};
use cd_time::{
    BusinessDayConvention, CalendarDate, CountUnit, CourtCalendar, DayStatus, DeadlineRule,
    HolidayRuleTable,
};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::error::Result;

/// Court-day and Julian-date calculator.
///
/// Dates are YYYY-MM-DD or MM/DD/YYYY.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "courtdays", version)]
pub struct Invocation {
    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Holiday rule file, overriding the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// A command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the loaded holiday rules
    Rules,
    /// Weekday of a date
    Weekday {
        /// Date to look up
        date: CalendarDate,
    },
    /// Leap-year test
    Leap {
        /// Year in [1, 9999]
        #[arg(value_parser = parse_year)]
        year: i32,
    },
    /// Holiday or court-day status of a date
    Holiday {
        /// Date to classify
        date: CalendarDate,
    },
    /// Date a number of calendar days away
    Offset {
        /// Start date
        date: CalendarDate,
        /// Signed day count
        #[arg(value_parser = parse_day_count, allow_negative_numbers = true)]
        days: i64,
    },
    /// Date a number of court days away
    CourtOffset {
        /// Start date
        date: CalendarDate,
        /// Signed court-day count
        #[arg(value_parser = parse_day_count, allow_negative_numbers = true)]
        days: i64,
    },
    /// Calendar days between two dates
    Diff {
        /// First date
        from: CalendarDate,
        /// Second date
        to: CalendarDate,
    },
    /// Court days between two dates
    CourtDiff {
        /// First date
        from: CalendarDate,
        /// Second date
        to: CalendarDate,
    },
    /// Deadline counted from a trigger date
    Deadline {
        /// Trigger date
        trigger: CalendarDate,
        /// Signed count; negative counts backwards
        #[arg(value_parser = parse_day_count, allow_negative_numbers = true)]
        count: i64,
        /// What to count: calendar or court days
        #[arg(long, default_value = "calendar")]
        unit: CountUnit,
        /// Landing-day convention; defaults to following, or preceding for
        /// a negative count
        #[arg(long)]
        landing: Option<BusinessDayConvention>,
    },
}

impl Command {
    /// The deadline rule of a `deadline` command.
    pub fn deadline_rule(&self) -> Option<DeadlineRule> {
        match self {
            Command::Deadline {
                count,
                unit,
                landing,
                ..
            } => Some(deadline_rule(*count, *unit, *landing)),
            _ => None,
        }
    }
}

fn deadline_rule(
    count: i64,
    unit: CountUnit,
    landing: Option<BusinessDayConvention>,
) -> DeadlineRule {
    let rule = match unit {
        CountUnit::CalendarDays => DeadlineRule::calendar_days(count),
        CountUnit::CourtDays => DeadlineRule::court_days(count),
    };
    match landing {
        Some(c) => rule.with_landing(c),
        None => rule,
    }
}

impl Invocation {
    /// The rule file to load: `--rules`, else the configured path.
    pub fn rules_path<'a>(&'a self, settings: &'a Settings) -> &'a Path {
        self.rules.as_deref().unwrap_or(&settings.rules.path)
    }
}

fn parse_year(s: &str) -> cd_core::Result<i32> {
    let year: i32 = s
        .trim()
        .parse()
        .map_err(|_| cd_core::Error::Parse(format!("invalid year {s:?}")))?;
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        "year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"
    );
    Ok(year)
}

/// Load the rule table for an invocation.
pub fn load_rules(invocation: &Invocation, settings: &Settings) -> Result<HolidayRuleTable> {
    let path = invocation.rules_path(settings);
    let table = RuleLoader::load_table(path)?;
    info!(path = %path.display(), rules = table.len(), "loaded rule table");
    Ok(table)
}

/// Execute `invocation`, writing human-readable output to `out`.
///
/// `out` is flushed before returning, so write failures surface as
/// [`CliError::Io`](crate::CliError::Io).
pub fn run(invocation: &Invocation, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let fmt = settings.output.date_format;
    let show = |d: &CalendarDate| d.format(fmt);
    let calendar = || load_rules(invocation, settings);
    debug!(command = ?invocation.command, "running");

    match &invocation.command {
        Command::Rules => write!(out, "{}", calendar()?)?,
        Command::Weekday { date } => writeln!(out, "{} is a {}", show(date), date.weekday()?)?,
        Command::Leap { year } => {
            let verb = if julian::is_leap_year(*year) {
                "is"
            } else {
                "is not"
            };
            writeln!(out, "{year} {verb} a leap year")?;
        }
        Command::Holiday { date } => {
            let table = calendar()?;
            let day = show(date);
            match (table.day_status(date), date.weekday()) {
                (DayStatus::CourtDay, Ok(w)) => writeln!(out, "{day} ({w}) is a court day")?,
                (DayStatus::Holiday(rule), Ok(w)) => {
                    writeln!(out, "{day} ({w}) is a holiday: {rule}")?
                }
                (DayStatus::Weekend, Ok(w)) => writeln!(out, "{day} ({w}) falls on a weekend")?,
                _ => writeln!(out, "{day} cannot be classified")?,
            }
        }
        Command::Offset { date, days } => {
            writeln!(out, "{}", show(&julian::offset_by_days(date, *days)?))?
        }
        Command::CourtOffset { date, days } => {
            let landed = calendar()?.offset_by_court_days(date, *days)?;
            writeln!(out, "{}", show(&landed))?
        }
        Command::Diff { from, to } => writeln!(out, "{}", julian::days_between(from, to))?,
        Command::CourtDiff { from, to } => {
            writeln!(out, "{}", calendar()?.court_days_between(from, to)?)?
        }
        Command::Deadline {
            trigger,
            count,
            unit,
            landing,
        } => {
            let rule = deadline_rule(*count, *unit, *landing);
            let deadline = rule.compute(trigger, &calendar()?)?;
            writeln!(out, "Trigger:     {}", show(&deadline.trigger))?;
            writeln!(out, "Count:       {rule}")?;
            writeln!(out, "Landing day: {}", show(&deadline.landing_day))?;
            if deadline.extended {
                let due = show(&deadline.due_date);
                writeln!(out, "Due date:    {due} (moved off a non-court day)")?;
            } else {
                writeln!(out, "Due date:    {}", show(&deadline.due_date))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
