//! `HolidayRuleTable`: holiday rules partitioned by month.

use tracing::debug;

use crate::month::Month;
use crate::rule::{HolidayRule, MonthKey, MONTH_BUCKETS};

/// An immutable table of holiday rules.
///
/// Bucket 0 holds the rules that apply to every month; buckets 1–12 hold the
/// rules for January–December.  Within a bucket, rules keep the order they
/// were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayRuleTable {
    name: String,
    buckets: [Vec<HolidayRule>; MONTH_BUCKETS],
}

impl HolidayRuleTable {
    /// Name used when none is given.
    pub const DEFAULT_NAME: &'static str = "Court holidays";

    /// Build a table from rules, grouping them by month key.
    ///
    /// Rules are appended to their bucket in iteration order.  Nothing is
    /// merged or deduplicated.
    pub fn build(rules: impl IntoIterator<Item = HolidayRule>) -> Self {
        Self::with_name(Self::DEFAULT_NAME, rules)
    }

    /// Build a named table.
    pub fn with_name(
        name: impl Into<String>,
        rules: impl IntoIterator<Item = HolidayRule>,
    ) -> Self {
        let mut buckets: [Vec<HolidayRule>; MONTH_BUCKETS] = Default::default();
        for rule in rules {
            buckets[rule.month().index()].push(rule);
        }
        let table = Self {
            name: name.into(),
            buckets,
        };
        debug!(
            name = %table.name,
            rules = table.len(),
            sizes = ?table.bucket_sizes(),
            "built holiday rule table"
        );
        table
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules filed under `key`, in insertion order.
    pub fn rules_for(&self, key: MonthKey) -> &[HolidayRule] {
        &self.buckets[key.index()]
    }

    /// Rules that apply to every month.
    pub fn all_months(&self) -> &[HolidayRule] {
        self.rules_for(MonthKey::AllMonths)
    }

    /// All rules, all-months bucket first, then January–December.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayRule> {
        self.buckets.iter().flatten()
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Number of rules per bucket, index 0 = all months.
    pub fn bucket_sizes(&self) -> [usize; MONTH_BUCKETS] {
        std::array::from_fn(|i| self.buckets[i].len())
    }

    /// Consume the table, returning its rules in [`iter`](Self::iter) order.
    pub fn release(self) -> Vec<HolidayRule> {
        let [all, months @ ..] = self.buckets;
        let mut rules = all;
        for bucket in months {
            rules.extend(bucket);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a HolidayRuleTable {
    type Item = &'a HolidayRule;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<HolidayRule>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter().flatten()
    }
}

impl FromIterator<HolidayRule> for HolidayRuleTable {
    fn from_iter<I: IntoIterator<Item = HolidayRule>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl std::fmt::Display for HolidayRuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        if !self.all_months().is_empty() {
            writeln!(f, "Every month:")?;
            for rule in self.all_months() {
                writeln!(f, "  {rule}")?;
            }
        }
        for month in Month::ALL {
            let rules = self.rules_for(MonthKey::Month(month));
            if rules.is_empty() {
                writeln!(f, "No holidays in {month}")?;
                continue;
            }
            writeln!(f, "{month}:")?;
            for rule in rules {
                writeln!(f, "  {rule}")?;
            }
        }
        Ok(())
    }
}
