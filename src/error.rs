//! Typed, exit-coded CLI errors. The solver itself has no recoverable
//! errors (every internal invariant is an assertion); this enum only
//! covers the command-line front end: bad options, unreadable input,
//! malformed puzzle text, and unwritable output.

use thiserror::Error;

/// CLI-facing error kinds, each mapped to a distinct process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// unknown flag or bad option value
    #[error("invalid option: {0}")]
    InvalidOption(String),
    /// the input file could not be opened or read
    #[error("could not read input: {0}")]
    InputIo(#[source] std::io::Error),
    /// ragged rows, an unrecognized cell character, or a missing K
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// the output file could not be written
    #[error("could not write output: {0}")]
    OutputIo(#[source] std::io::Error),
}

impl CliError {
    /// the process exit code this error kind maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidOption(_) => 2,
            CliError::InputIo(_) => 3,
            CliError::MalformedInput(_) => 4,
            CliError::OutputIo(_) => 5,
        }
    }
}
