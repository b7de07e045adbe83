//! Validation of a captured line and the final status decision.

use std::io::BufRead;

use input::{Line, LineReader};
use numeric::{ParsedPrefix, parse_decimal_prefix};
use tracing::{debug, info};

use crate::{ExitStatus, Rejection};

/// Checks that `parsed` covers all of `bytes`.
///
/// The number may be followed by a NUL byte, which ends the line the same way
/// the buffer terminator does, or by the newline that ended the line as its
/// final byte. A prefix reaching past `bytes` is rejected.
fn judge(bytes: &[u8], parsed: ParsedPrefix) -> Result<i64, Rejection> {
    if !parsed.consumed_any() {
        return Err(Rejection::NotNumeric);
    }

    match bytes.get(parsed.end()..) {
        None => Err(Rejection::NotNumeric),
        Some([] | [b'\n'] | [0, ..]) => Ok(parsed.value()),
        Some([byte, ..]) => Err(Rejection::TrailingInput {
            offset: parsed.end(),
            byte: *byte,
        }),
    }
}

/// Parses and validates a captured line.
pub fn judge_line(line: &Line) -> Result<i64, Rejection> {
    let bytes = line.as_bytes();
    let parsed = parse_decimal_prefix(bytes);
    debug!(
        target: "exitline::verdict",
        value = parsed.value(),
        end = parsed.end(),
        saturated = parsed.saturated(),
        newline = line.ends_with_newline(),
        truncated = line.truncated(),
        "parsed input line"
    );
    judge(bytes, parsed)
}

/// Reads one line from `stdin` and validates it.
pub fn evaluate<R>(reader: LineReader, stdin: &mut R) -> Result<i64, Rejection>
where
    R: BufRead + ?Sized,
{
    let line = reader.read_line(stdin)?.ok_or(Rejection::NoInput)?;
    judge_line(&line)
}

/// Maps the outcome of [`evaluate`] to the process exit status.
#[must_use]
pub fn dispatch(outcome: Result<i64, Rejection>) -> ExitStatus {
    match outcome {
        Ok(value) => {
            let status = ExitStatus::from_value(value);
            debug!(target: "exitline::verdict", value, %status, "accepted input");
            status
        }
        Err(rejection) => {
            info!(
                target: "exitline::verdict",
                reason = rejection.label(),
                "rejected input: {rejection}"
            );
            ExitStatus::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::InputError;
    use std::io::{self, Cursor};

    fn run(text: &[u8]) -> ExitStatus {
        let mut stdin = Cursor::new(text.to_vec());
        dispatch(evaluate(LineReader::new(), &mut stdin))
    }

    fn outcome(text: &[u8]) -> Result<i64, Rejection> {
        let mut stdin = Cursor::new(text.to_vec());
        evaluate(LineReader::new(), &mut stdin)
    }

    #[test]
    fn accepts_number_followed_by_newline() {
        assert_eq!(outcome(b"42\n").unwrap(), 42);
        assert_eq!(run(b"42\n").as_u8(), 42);
    }

    #[test]
    fn accepts_number_at_end_of_stream() {
        assert_eq!(outcome(b"42").unwrap(), 42);
    }

    #[test]
    fn zero_and_negative_values() {
        assert_eq!(run(b"0\n"), ExitStatus::ZERO);
        assert_eq!(run(b"-1\n").as_u8(), 255);
        assert_eq!(run(b"+3\n").as_u8(), 3);
        assert_eq!(run(b"257\n").as_u8(), 1);
    }

    #[test]
    fn empty_stream_is_no_input() {
        assert!(matches!(outcome(b""), Err(Rejection::NoInput)));
        assert_eq!(run(b""), ExitStatus::ZERO);
    }

    #[test]
    fn non_numeric_lines_are_rejected() {
        assert!(matches!(outcome(b"abc\n"), Err(Rejection::NotNumeric)));
        assert!(matches!(outcome(b"\n"), Err(Rejection::NotNumeric)));
        assert!(matches!(outcome(b"-\n"), Err(Rejection::NotNumeric)));
        assert!(matches!(outcome(b" 5\n"), Err(Rejection::NotNumeric)));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        assert!(matches!(
            outcome(b"12abc\n"),
            Err(Rejection::TrailingInput { offset: 2, byte: b'a' })
        ));
        assert!(matches!(
            outcome(b"5 \n"),
            Err(Rejection::TrailingInput { offset: 1, byte: b' ' })
        ));
        assert!(matches!(
            outcome(b"9\r\n"),
            Err(Rejection::TrailingInput { offset: 1, byte: b'\r' })
        ));
        assert_eq!(run(b"12abc\n"), ExitStatus::ZERO);
    }

    #[test]
    fn newline_must_be_the_final_byte() {
        let parsed = parse_decimal_prefix(b"7\n\n");
        assert!(matches!(
            judge(b"7\n\n", parsed),
            Err(Rejection::TrailingInput { offset: 1, byte: b'\n' })
        ));
    }

    #[test]
    fn nul_byte_ends_the_number() {
        assert_eq!(outcome(b"5\0junk\n").unwrap(), 5);
        assert_eq!(outcome(b"-3\0").unwrap(), -3);
        assert_eq!(run(b"5\0junk\n").as_u8(), 5);
    }

    #[test]
    fn leading_nul_byte_is_not_numeric() {
        assert!(matches!(outcome(b"\0"), Err(Rejection::NotNumeric)));
        assert_eq!(run(b"\0"), ExitStatus::ZERO);
    }

    #[test]
    fn prefix_longer_than_line_is_rejected() {
        let parsed = parse_decimal_prefix(b"123");
        assert!(matches!(judge(b"", parsed), Err(Rejection::NotNumeric)));
        assert!(matches!(judge(b"1", parsed), Err(Rejection::NotNumeric)));
    }

    #[test]
    fn only_the_first_line_is_considered() {
        assert_eq!(run(b"8\n9\n").as_u8(), 8);
        assert_eq!(run(b"x\n9\n"), ExitStatus::ZERO);
    }

    #[test]
    fn truncated_digit_runs_saturate() {
        let digits = vec![b'9'; 150];
        assert_eq!(outcome(&digits).unwrap(), i64::MAX);
        assert_eq!(run(&digits).as_u8(), 255);
    }

    #[test]
    fn truncation_can_hide_trailing_garbage() {
        let mut text = vec![b'4'; 99];
        text.extend_from_slice(b"garbage\n");
        assert_eq!(outcome(&text).unwrap(), i64::MAX);
    }

    #[test]
    fn read_errors_collapse_to_zero() {
        let error = Rejection::from(InputError::from(io::Error::other("closed")));
        assert_eq!(dispatch(Err(error)), ExitStatus::ZERO);
    }

    #[test]
    fn repeated_runs_agree() {
        for text in [&b"42\n"[..], b"-7\n", b"nope\n", b""] {
            assert_eq!(run(text), run(text));
        }
    }
}
