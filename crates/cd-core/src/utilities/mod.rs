//! Text helpers shared by the loader and the command-line front end.

/// Date rendering (`DateFormat`, ordinals).
pub mod data_formatters;

/// Date and day-count parsing.
pub mod data_parsers;

pub use data_formatters::{format_ordinal, format_ymd, DateFormat};
pub use data_parsers::{parse_date_any, parse_date_mdy, parse_day_count, parse_iso_date};
