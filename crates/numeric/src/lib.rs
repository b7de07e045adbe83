#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `numeric` parses the longest base-10 signed integer prefix of a byte slice.
//! The accepted grammar is an optional `+` or `-` followed by one or more ASCII
//! digits, starting at the first byte. Parsing stops at the first byte that
//! cannot extend the number; the caller receives the value together with the
//! offset where parsing stopped so it can decide what the leftover bytes mean.
//!
//! # Invariants
//!
//! - [`ParsedPrefix::end`] is `0` whenever no digit was consumed, including the
//!   case of a lone sign. A non-zero `end` always covers at least one digit.
//! - Values outside the `i64` range saturate at [`i64::MAX`] or [`i64::MIN`];
//!   every remaining digit is still consumed so `end` reflects the full run.
//! - Leading whitespace is not skipped.
//!
//! # Examples
//!
//! ```
//! use numeric::parse_decimal_prefix;
//!
//! let parsed = parse_decimal_prefix(b"-17\n");
//! assert_eq!(parsed.value(), -17);
//! assert_eq!(parsed.end(), 3);
//! assert!(parsed.consumed_any());
//!
//! let rejected = parse_decimal_prefix(b"abc");
//! assert_eq!(rejected.end(), 0);
//! ```

use tracing::trace;

/// Result of scanning a decimal prefix.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParsedPrefix {
    value: i64,
    end: usize,
    saturated: bool,
}

impl ParsedPrefix {
    /// Prefix describing input where nothing was consumed.
    pub const NOTHING: Self = Self {
        value: 0,
        end: 0,
        saturated: false,
    };

    /// Parsed numeric value. Zero when nothing was consumed.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Offset immediately after the last consumed byte.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` when at least one digit was consumed.
    #[must_use]
    pub const fn consumed_any(self) -> bool {
        self.end != 0
    }

    /// Returns `true` when the digits described a value outside the `i64`
    /// range and the result was clamped.
    #[must_use]
    pub const fn saturated(self) -> bool {
        self.saturated
    }
}

/// Parses an optional sign followed by decimal digits at the start of `bytes`.
#[must_use]
pub fn parse_decimal_prefix(bytes: &[u8]) -> ParsedPrefix {
    let (negative, digits_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digit_count = bytes[digits_start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digit_count == 0 {
        return ParsedPrefix::NOTHING;
    }

    let end = digits_start + digit_count;
    let mut value: i64 = 0;
    let mut saturated = false;

    // Negative values accumulate downwards so i64::MIN stays representable.
    for &byte in &bytes[digits_start..end] {
        let digit = i64::from(byte - b'0');
        let next = value.checked_mul(10).and_then(|scaled| {
            if negative {
                scaled.checked_sub(digit)
            } else {
                scaled.checked_add(digit)
            }
        });
        match next {
            Some(next) => value = next,
            None => {
                saturated = true;
                value = if negative { i64::MIN } else { i64::MAX };
                break;
            }
        }
    }

    if saturated {
        trace!(target: "exitline::numeric", end, "decimal prefix saturated");
    }

    ParsedPrefix {
        value,
        end,
        saturated,
    }
}
