//! Process exit status produced by a run.
//!
//! Unix hosts only report the low eight bits of a process status, so every
//! parsed value is reduced modulo [`EXIT_STATUS_MODULUS`] with Euclidean
//! remainder: `-1` becomes `255` and `256` becomes `0`. Doing the reduction
//! here keeps the observable status identical across platforms.

use std::fmt;

/// Number of distinct exit statuses a process can report.
pub const EXIT_STATUS_MODULUS: i64 = 256;

/// Exit status reported to the invoking environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Status shared by every rejected input.
    pub const ZERO: Self = Self(0);

    /// Status returned when command-line arguments are invalid.
    pub const SYNTAX: Self = Self(1);

    /// Wraps a parsed value into the representable status range.
    #[must_use]
    pub const fn from_value(value: i64) -> Self {
        Self(value.rem_euclid(EXIT_STATUS_MODULUS) as u8)
    }

    /// Returns the status as a byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.0)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
