//! Error type shared by the parsing, validation and session layers.

use thiserror::Error;

/// Errors produced while reading parameters or running a session.
#[derive(Debug, Error)]
pub enum Error {
    /// The text could not be read as a finite decimal number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Frequency must be strictly positive for the period `1/f0` to exist.
    #[error("frequency must be greater than zero, got {0}")]
    InvalidFrequency(f64),

    /// The user asked to leave, or input ended.
    #[error("cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for a user-requested exit, which is not a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
