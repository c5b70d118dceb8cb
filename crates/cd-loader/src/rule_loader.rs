//! CSV rule-file loader.
//!
//! The file has a header row naming the columns `Month`, `Rule Type`,
//! `Rule`, `Holiday`, and `Authority` (in any order, case-insensitive):
//!
//! ```text
//! Month,Rule Type,Rule,Holiday,Authority
//! 0,recurring,Saturday,Weekend,Cal. Code Civ. Proc. § 12a
//! 11,relative,Thursday-4,Thanksgiving Day,Cal. Gov. Code § 6700
//! 1,fixed,1,New Year's Day,Cal. Gov. Code § 6700
//! ```

use std::io::Read;
use std::path::Path;

use cd_time::{HolidayRule, HolidayRuleTable, Month, MonthKey, Occurrence, Weekday};
use csv::{StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::LoaderError;

/// Header names in the order they are documented.
pub const COLUMNS: [&str; 5] = ["Month", "Rule Type", "Rule", "Holiday", "Authority"];

/// Loader for holiday rule files.
pub struct RuleLoader;

impl RuleLoader {
    /// Load rules from a CSV file, in file order.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<HolidayRule>, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.display().to_string()));
        }
        debug!(path = %path.display(), "loading holiday rules");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load rules from any CSV source, in record order.
    ///
    /// Rows whose fields are all empty are skipped.  Any other malformed row
    /// fails the whole load with its line number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<HolidayRule>, LoaderError> {
        let mut reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let columns = Columns::resolve(reader.headers()?)?;

        let mut rules = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // Header is line 1.
            let row = record
                .position()
                .map_or(idx as u64 + 2, |p| p.line());
            if record.iter().all(str::is_empty) {
                warn!(row, "skipping blank row");
                continue;
            }
            rules.push(columns.parse(&record, row)?);
        }
        debug!(rules = rules.len(), "loaded holiday rules");
        Ok(rules)
    }

    /// Load a rule file into a table named after the file stem.
    pub fn load_table<P: AsRef<Path>>(path: P) -> Result<HolidayRuleTable, LoaderError> {
        let path = path.as_ref();
        let rules = Self::from_path(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| HolidayRuleTable::DEFAULT_NAME.to_string());
        Ok(HolidayRuleTable::with_name(name, rules))
    }
}

/// Load a rule file into a [`HolidayRuleTable`].
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<HolidayRuleTable, LoaderError> {
    RuleLoader::load_table(path)
}

/// Column positions resolved from the header row.
struct Columns {
    month: usize,
    rule_type: usize,
    rule: usize,
    holiday: usize,
    authority: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoaderError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            month: find(COLUMNS[0])?,
            rule_type: find(COLUMNS[1])?,
            rule: find(COLUMNS[2])?,
            holiday: find(COLUMNS[3])?,
            authority: find(COLUMNS[4])?,
        })
    }

    fn parse(&self, record: &StringRecord, row: u64) -> Result<HolidayRule, LoaderError> {
        let field = |i: usize| record.get(i).unwrap_or("");

        let month =
            parse_month_key(field(self.month)).map_err(|m| LoaderError::invalid(row, m))?;
        let kind =
            RuleType::parse(field(self.rule_type)).map_err(|m| LoaderError::invalid(row, m))?;
        let name = field(self.holiday);
        if name.is_empty() {
            return Err(LoaderError::invalid(row, "holiday name is empty"));
        }
        let authority = field(self.authority);
        let rule = field(self.rule);

        match kind {
            RuleType::Fixed => {
                let day: u8 = rule
                    .parse()
                    .map_err(|_| LoaderError::invalid(row, format!("invalid day {rule:?}")))?;
                HolidayRule::fixed(month, day, name, authority)
                    .map_err(|e| LoaderError::invalid(row, e.to_string()))
            }
            RuleType::Recurring => {
                let weekday = parse_weekday(rule, row)?;
                Ok(HolidayRule::recurring(month, weekday, name, authority))
            }
            RuleType::Relative => {
                let (weekday, which) = rule.split_once('-').ok_or_else(|| {
                    LoaderError::invalid(
                        row,
                        format!("expected <weekday>-<occurrence>, got {rule:?}"),
                    )
                })?;
                let weekday = parse_weekday(weekday, row)?;
                match parse_occurrence(which).map_err(|m| LoaderError::invalid(row, m))? {
                    Some(occurrence) => Ok(HolidayRule::relative(
                        month, weekday, occurrence, name, authority,
                    )),
                    None => Ok(HolidayRule::recurring(month, weekday, name, authority)),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleType {
    Fixed,
    Relative,
    Recurring,
}

impl RuleType {
    fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "absolute" | "a" => Ok(RuleType::Fixed),
            "relative" | "r" => Ok(RuleType::Relative),
            "recurring" | "weekend" | "w" => Ok(RuleType::Recurring),
            _ => Err(format!("unknown rule type {s:?}")),
        }
    }
}

/// `0`, `all`, and the legacy `13` mean every month.
fn parse_month_key(s: &str) -> Result<MonthKey, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "0" | "13" | "all" | "all months" => Ok(MonthKey::AllMonths),
        other => other
            .parse::<Month>()
            .map(MonthKey::Month)
            .map_err(|_| format!("invalid month {s:?}")),
    }
}

fn parse_weekday(s: &str, row: u64) -> Result<Weekday, LoaderError> {
    s.parse::<Weekday>()
        .map_err(|_| LoaderError::invalid(row, format!("invalid weekday {s:?}")))
}

/// `None` means every occurrence.
fn parse_occurrence(s: &str) -> Result<Option<Occurrence>, String> {
    let lower = s.trim().to_ascii_lowercase();
    let occurrence = match lower.as_str() {
        "all" => return Ok(None),
        "last" => Occurrence::Last,
        "first" => Occurrence::Nth(1),
        "second" => Occurrence::Nth(2),
        "third" => Occurrence::Nth(3),
        "fourth" => Occurrence::Nth(4),
        n => Occurrence::Nth(
            n.parse()
                .map_err(|_| format!("invalid occurrence {s:?}"))?,
        ),
    };
    Ok(Some(occurrence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd_time::RuleKind;

    const HEADER: &str = "Month,Rule Type,Rule,Holiday,Authority\n";

    fn load(body: &str) -> Result<Vec<HolidayRule>, LoaderError> {
        RuleLoader::from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_file_not_found() {
        let result = RuleLoader::from_path("nonexistent.csv");
        assert!(matches!(result, Err(LoaderError::FileNotFound(_))));
    }

    #[test]
    fn parses_each_rule_type() {
        let rules = load(
            "0,recurring,Saturday,Weekend,CCP 12a\n\
             11,relative,Thursday-4,Thanksgiving Day,Gov. Code 6700\n\
             1,fixed,1,New Year's Day,Gov. Code 6700\n",
        )
        .unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].month(), MonthKey::AllMonths);
        assert_eq!(
            rules[0].kind(),
            &RuleKind::RecurringWeekday {
                weekday: Weekday::Saturday
            }
        );
        assert_eq!(
            rules[1].kind(),
            &RuleKind::Relative {
                weekday: Weekday::Thursday,
                occurrence: Occurrence::Nth(4)
            }
        );
        assert_eq!(rules[2].kind(), &RuleKind::Fixed { day: 1 });
        assert_eq!(rules[2].authority(), "Gov. Code 6700");
    }

    #[test]
    fn legacy_codes_and_names() {
        let rules = load(
            "13,W,Sunday,Weekend,\n\
             May,R,Monday-last,Memorial Day,\n\
             september,r,mon-first,Labor Day,\n\
             all,weekend,sat,Weekend,\n\
             7,A,4,Independence Day,\n\
             3,relative,Friday-all,Fridays in March,\n",
        )
        .unwrap();
        assert_eq!(rules[0].month(), MonthKey::AllMonths);
        assert_eq!(rules[1].month(), MonthKey::Month(Month::May));
        assert_eq!(
            rules[1].kind(),
            &RuleKind::Relative {
                weekday: Weekday::Monday,
                occurrence: Occurrence::Last
            }
        );
        assert_eq!(
            rules[2].kind(),
            &RuleKind::Relative {
                weekday: Weekday::Monday,
                occurrence: Occurrence::Nth(1)
            }
        );
        assert_eq!(rules[3].month(), MonthKey::AllMonths);
        assert_eq!(rules[4].kind(), &RuleKind::Fixed { day: 4 });
        assert_eq!(
            rules[5].kind(),
            &RuleKind::RecurringWeekday {
                weekday: Weekday::Friday
            }
        );
    }

    #[test]
    fn columns_matched_by_name() {
        let csv = "holiday,authority,rule,rule type,month\nChristmas Day,Gov. Code,25,fixed,12\n";
        let rules = RuleLoader::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rules[0].name(), "Christmas Day");
        assert_eq!(rules[0].month(), MonthKey::Month(Month::December));
    }

    #[test]
    fn missing_column() {
        let csv = "Month,Rule Type,Rule,Holiday\n1,fixed,1,New Year's Day\n";
        let err = RuleLoader::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(c) if c == "Authority"));
    }

    #[test]
    fn bad_rows_report_their_line() {
        let cases = [
            "14,fixed,1,Bad Month,\n",
            "1,sometimes,1,Bad Type,\n",
            "1,fixed,32,Bad Day,\n",
            "1,fixed,x,Bad Day,\n",
            "1,relative,Thursday,No Occurrence,\n",
            "1,relative,Thursday-fifthish,Bad Occurrence,\n",
            "0,recurring,Caturday,Bad Weekday,\n",
            "1,fixed,1,,\n",
        ];
        for body in cases {
            let err = load(&format!("1,fixed,1,New Year's Day,\n{body}")).unwrap_err();
            assert!(
                matches!(err, LoaderError::InvalidRecord { row: 3, .. }),
                "{body:?} gave {err}"
            );
        }
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rules = load("1,fixed,1,New Year's Day,\n,,,,\n7,fixed,4,Independence Day,\n").unwrap();
        assert_eq!(rules.len(), 2);
    }
}
