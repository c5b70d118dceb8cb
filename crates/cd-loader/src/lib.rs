//! # cd-loader
//!
//! Loads holiday rules from CSV rule files.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cd_loader::RuleLoader;
//!
//! let table = RuleLoader::load_table("data/california_courts.csv")?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod rule_loader;

pub use error::LoaderError;
pub use rule_loader::{load_table, RuleLoader, COLUMNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{load_table, LoaderError, RuleLoader};
}
