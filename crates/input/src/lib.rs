#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `input` captures a single bounded line from a buffered reader, normally the
//! locked standard input handle. The reader mirrors the classic fixed-buffer
//! line primitive: a buffer of `capacity` bytes holds at most `capacity - 1`
//! bytes of input, reading stops after the first newline (which is kept) or at
//! end-of-stream, and overlong lines are cut at the capacity with the rest of
//! the stream left unread.
//!
//! # Errors
//!
//! [`LineReader::read_line`] returns [`InputError`] when the underlying reader
//! fails. Interrupted reads are retried transparently.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use input::LineReader;
//!
//! let mut stdin = Cursor::new(b"42\nrest".to_vec());
//! let line = LineReader::new().read_line(&mut stdin).unwrap().unwrap();
//! assert_eq!(line.as_bytes(), b"42\n");
//! assert!(line.ends_with_newline());
//!
//! let mut empty = Cursor::new(Vec::new());
//! assert!(LineReader::new().read_line(&mut empty).unwrap().is_none());
//! ```

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::debug;

/// Buffer capacity used by the `exitline` binary, terminator included.
pub const DEFAULT_LINE_CAPACITY: usize = 100;

/// Smallest capacity that still leaves room for one byte of input.
pub const MIN_LINE_CAPACITY: usize = 2;

/// Failure while pulling a line from the input stream.
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader reported an error.
    #[error("failed to read input line: {source}")]
    Read {
        /// Error returned by the reader.
        #[from]
        source: io::Error,
    },
}

/// A captured input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    bytes: Vec<u8>,
    truncated: bool,
}

impl Line {
    /// Captured bytes, including the newline when one was read.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns `true` when the line stopped at a newline.
    #[must_use]
    pub fn ends_with_newline(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }

    /// Returns `true` when reading stopped because the buffer filled up before
    /// a newline was seen.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Reads one bounded line from a [`BufRead`] source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineReader {
    capacity: usize,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader {
    /// Creates a reader with [`DEFAULT_LINE_CAPACITY`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_LINE_CAPACITY,
        }
    }

    /// Creates a reader with a custom buffer capacity.
    ///
    /// Capacities below [`MIN_LINE_CAPACITY`] are raised to it.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity < MIN_LINE_CAPACITY {
            MIN_LINE_CAPACITY
        } else {
            capacity
        };
        Self { capacity }
    }

    /// Maximum number of input bytes a single line can hold.
    #[must_use]
    pub const fn usable(self) -> usize {
        self.capacity - 1
    }

    /// Reads a single line.
    ///
    /// Returns `Ok(None)` when the stream is already exhausted. Bytes past the
    /// newline, or past the usable capacity, remain in `reader`.
    pub fn read_line<R>(self, reader: &mut R) -> Result<Option<Line>, InputError>
    where
        R: BufRead + ?Sized,
    {
        let limit = self.usable();
        let mut bytes = Vec::with_capacity(limit);
        let mut saw_newline = false;

        while bytes.len() < limit {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            if available.is_empty() {
                break;
            }

            let window = &available[..available.len().min(limit - bytes.len())];
            let taken = match window.iter().position(|&byte| byte == b'\n') {
                Some(newline) => {
                    saw_newline = true;
                    newline + 1
                }
                None => window.len(),
            };
            bytes.extend_from_slice(&window[..taken]);
            reader.consume(taken);

            if saw_newline {
                break;
            }
        }

        if bytes.is_empty() {
            debug!(target: "exitline::input", "input stream exhausted before any byte");
            return Ok(None);
        }

        let truncated = !saw_newline && bytes.len() == limit;
        debug!(
            target: "exitline::input",
            len = bytes.len(),
            newline = saw_newline,
            truncated,
            "captured input line"
        );
        Ok(Some(Line { bytes, truncated }))
    }
}
