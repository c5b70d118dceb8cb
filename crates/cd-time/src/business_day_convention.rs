//! Landing-day conventions.

use std::str::FromStr;

use cd_core::errors::Error;

/// How to move a date that falls on a non-court day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Choose the first court day after the given date.
    #[default]
    Following,
    /// Choose the first court day after the given date unless it belongs to a
    /// different month; in that case choose the first court day before it.
    ModifiedFollowing,
    /// Choose the first court day before the given date.
    Preceding,
    /// Choose the first court day before the given date unless it belongs to
    /// a different month; in that case choose the first court day after it.
    ModifiedPreceding,
    /// Keep the date as is.
    Unadjusted,
}

impl BusinessDayConvention {
    /// All conventions.
    pub const ALL: [BusinessDayConvention; 5] = [
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Unadjusted,
    ];
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    /// Case-insensitive; spaces, dashes, and underscores are ignored
    /// (`"modified-following"`, `"ModifiedFollowing"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "none" | "u" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(Error::Parse(format!("unknown landing convention {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_roundtrip() {
        for c in BusinessDayConvention::ALL {
            assert_eq!(c.to_string().parse::<BusinessDayConvention>(), Ok(c));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(
            "modified-following".parse::<BusinessDayConvention>(),
            Ok(BusinessDayConvention::ModifiedFollowing)
        );
        assert_eq!(
            "MP".parse::<BusinessDayConvention>(),
            Ok(BusinessDayConvention::ModifiedPreceding)
        );
        assert_eq!("none".parse::<BusinessDayConvention>(), Ok(BusinessDayConvention::Unadjusted));
        assert!("nearest".parse::<BusinessDayConvention>().is_err());
    }
}
