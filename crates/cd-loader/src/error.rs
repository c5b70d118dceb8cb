//! Loader errors.

use thiserror::Error;

/// Errors that can occur while loading a rule file.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row that does not describe a valid rule
    #[error("Invalid rule in row {row}: {message}")]
    InvalidRecord {
        /// Line number in the file (the header is line 1).
        row: u64,
        /// What was wrong.
        message: String,
    },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl LoaderError {
    pub(crate) fn invalid(row: u64, message: impl Into<String>) -> Self {
        LoaderError::InvalidRecord {
            row,
            message: message.into(),
        }
    }
}
