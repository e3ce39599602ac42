//! CLI error types.

use rosterdb_core::CoreError;
use std::io;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors reported back to the shell user.
///
/// None of these end the session except [`CliError::Io`].
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments; carries the usage line.
    #[error("{0}")]
    Usage(&'static str),

    /// Id argument is not an unsigned integer.
    #[error("error: invalid id `{0}`")]
    InvalidId(String),

    /// Age argument is not in 0..=255.
    #[error("error: invalid age `{0}`")]
    InvalidAge(String),

    /// First token is not a known command.
    #[error("unknown command `{0}`. type `help`")]
    UnknownCommand(String),

    /// Error from the store layer.
    #[error("error: {0}")]
    Core(#[from] CoreError),

    /// Reading input or writing output failed.
    #[error("error: I/O: {0}")]
    Io(#[from] io::Error),
}
