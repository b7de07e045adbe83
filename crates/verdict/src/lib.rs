#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verdict` turns one captured input line into the process exit status. It
//! runs the parser from the `numeric` crate, checks that the number covers the
//! whole line, and maps the result into an [`ExitStatus`].
//!
//! # Design
//!
//! The pipeline has three terminal outcomes:
//!
//! - no line could be read: status 0;
//! - a line was read but is not exactly one integer: status 0;
//! - a line holding exactly one integer: status equal to that integer modulo
//!   [`EXIT_STATUS_MODULUS`].
//!
//! Every failure is represented by a [`Rejection`] so diagnostics can name the
//! cause, while [`dispatch`] collapses all of them to [`ExitStatus::ZERO`].
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use input::LineReader;
//! use verdict::{ExitStatus, dispatch, evaluate};
//!
//! let mut stdin = Cursor::new(b"-1\n".to_vec());
//! let status = dispatch(evaluate(LineReader::new(), &mut stdin));
//! assert_eq!(status, ExitStatus::from_value(255));
//!
//! let mut stdin = Cursor::new(b"12abc\n".to_vec());
//! assert_eq!(dispatch(evaluate(LineReader::new(), &mut stdin)), ExitStatus::ZERO);
//! ```

mod exit_status;
mod judge;
mod rejection;

pub use exit_status::{EXIT_STATUS_MODULUS, ExitStatus};
pub use judge::{dispatch, evaluate, judge_line};
pub use rejection::Rejection;
