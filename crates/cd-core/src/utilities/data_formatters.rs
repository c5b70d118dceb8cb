//! Date formatting helpers.
//!
//! [`DateFormat`] is also the `output.date_format` configuration value, so it
//! deserialises from the lowercase names `iso`, `mdy`, `dmy` and `long`.

use serde::Deserialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How a date is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `2011-11-24`
    #[default]
    Iso,
    /// `11/24/2011`
    Mdy,
    /// `24/11/2011`
    Dmy,
    /// `November 24, 2011`
    Long,
}

/// Format a `(year, month, day)` triple.
///
/// `month` outside 1–12 renders numerically in the `Long` style rather than
/// panicking.
pub fn format_ymd(year: i32, month: u8, day: u8, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => format!("{year:04}-{month:02}-{day:02}"),
        DateFormat::Mdy => format!("{month:02}/{day:02}/{year:04}"),
        DateFormat::Dmy => format!("{day:02}/{month:02}/{year:04}"),
        DateFormat::Long => match MONTH_NAMES.get(usize::from(month).wrapping_sub(1)) {
            Some(name) => format!("{name} {day}, {year}"),
            None => format!("{month}/{day}/{year}"),
        },
    }
}

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a number with its ordinal suffix (e.g. `4` → `"4th"`).
pub fn format_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_styles() {
        assert_eq!(format_ymd(2011, 11, 24, DateFormat::Iso), "2011-11-24");
        assert_eq!(format_ymd(2011, 11, 24, DateFormat::Mdy), "11/24/2011");
        assert_eq!(format_ymd(2011, 11, 24, DateFormat::Dmy), "24/11/2011");
        assert_eq!(
            format_ymd(2011, 11, 24, DateFormat::Long),
            "November 24, 2011"
        );
        assert_eq!(format_ymd(33, 1, 2, DateFormat::Iso), "0033-01-02");
    }

    #[test]
    fn test_long_with_bad_month() {
        assert_eq!(format_ymd(2011, 0, 5, DateFormat::Long), "0/5/2011");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(format_ordinal(1), "1st");
        assert_eq!(format_ordinal(2), "2nd");
        assert_eq!(format_ordinal(3), "3rd");
        assert_eq!(format_ordinal(4), "4th");
        assert_eq!(format_ordinal(11), "11th");
        assert_eq!(format_ordinal(22), "22nd");
    }
}
