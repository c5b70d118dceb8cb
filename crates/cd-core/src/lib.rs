//! # cd-core
//!
//! Core definitions shared by every courtdays crate: the error hierarchy,
//! layered settings, and date text helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Layered configuration (defaults, TOML file, environment).
pub mod settings;

/// Date parsing and formatting helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
pub use utilities::DateFormat;
