//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
///
/// Command-line usage errors are reported by `clap` before a command runs.
#[derive(Error, Debug)]
pub enum CliError {
    /// Date or rule error
    #[error(transparent)]
    Core(#[from] cd_core::Error),

    /// Rule file error
    #[error("rule file: {0}")]
    Loader(#[from] cd_loader::LoaderError),

    /// I/O error, including a failed flush of the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
