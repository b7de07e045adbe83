//! Reasons an input line does not produce its own exit status.

use input::InputError;
use thiserror::Error;

/// Why a run ends with status 0 instead of a parsed value.
#[derive(Debug, Error)]
pub enum Rejection {
    /// The input stream was exhausted before any byte arrived.
    #[error("no input")]
    NoInput,
    /// Reading the line failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The line does not begin with an optionally signed decimal number.
    #[error("input is not a decimal integer")]
    NotNumeric,
    /// The number is followed by something other than the end of the line.
    #[error("unexpected byte {byte:#04x} at offset {offset} after the number")]
    TrailingInput {
        /// Offset of the first offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl Rejection {
    /// Short machine-friendly label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoInput => "no-input",
            Self::Input(_) => "read-error",
            Self::NotNumeric => "not-numeric",
            Self::TrailingInput { .. } => "trailing-input",
        }
    }
}
