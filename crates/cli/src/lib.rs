#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for `exitline`. Without
//! arguments the program reads one line from standard input and exits with
//! the integer on that line, or with status 0 when the line is missing, not a
//! number, or carries anything after the number. The only options are
//! `--help`, `--version`, and `--verbose`; none of them changes how a line is
//! judged.
//!
//! # Design
//!
//! [`run`] accepts the argument iterator together with handles for standard
//! input, output, and error so tests can drive it in-process. A
//! [`clap`](https://docs.rs/clap/) command definition parses the arguments;
//! the stdin pipeline itself lives in the `verdict` crate.
//!
//! # Invariants
//!
//! - `run` never panics; read failures surface as status 0.
//! - Without `--help` or `--version`, nothing is written to `stdout`.
//! - Without `--verbose`, nothing is written to `stderr` unless the arguments
//!   themselves are invalid.
//! - Standard input is not read when help, version, or an argument error is
//!   reported.
//!
//! # Errors
//!
//! Invalid arguments print clap's diagnostic to `stderr` and yield
//! [`ExitStatus::SYNTAX`].
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use cli::run;
//!
//! let mut stdin = Cursor::new(b"42\n".to_vec());
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run(["exitline"], &mut stdin, &mut stdout, &mut stderr);
//!
//! assert_eq!(status.as_u8(), 42);
//! assert!(stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::{Arg, ArgAction, Command};
use input::LineReader;
use logging::{VerbosityConfig, init_tracing};
use tracing::debug;
pub use verdict::ExitStatus;

/// Name used for usage output when the argument list is empty.
pub const PROGRAM_NAME: &str = "exitline";

/// Deterministic help text.
const HELP_TEXT: &str = concat!(
    "Usage: exitline [-h] [-V] [-v...]\n",
    "\n",
    "Reads one line from standard input and exits with the integer it holds.\n",
    "The line must be an optional '+' or '-' followed by decimal digits and\n",
    "nothing else apart from the final newline. At most 99 bytes are read.\n",
    "The exit status is the value modulo 256; every other input exits 0.\n",
    "\n",
    "Options:\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -v, --verbose    Explain the decision on standard error (repeat for more).\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default, Eq, PartialEq)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbosity: u8,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Explain the decision on standard error.")
                .action(ArgAction::Count),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbosity: matches.get_count("verbose"),
    })
}

/// Returns the version banner printed by `--version`.
#[must_use]
pub fn version_banner() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the program with the provided arguments and standard streams.
///
/// The returned status is what the process should exit with.
pub fn run<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitStatus
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: BufRead + ?Sized,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdin, stdout),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            ExitStatus::SYNTAX
        }
    }
}

fn execute<In, Out>(parsed: ParsedArgs, stdin: &mut In, stdout: &mut Out) -> ExitStatus
where
    In: BufRead + ?Sized,
    Out: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        verbosity,
    } = parsed;

    if show_help {
        return write_or_syntax(stdout, HELP_TEXT);
    }

    if show_version {
        return write_or_syntax(stdout, &version_banner());
    }

    let config = VerbosityConfig::from_verbose_level(verbosity);
    if init_tracing(config) {
        debug!(
            target: "exitline::cli",
            level = config.verbose_level(),
            "diagnostics enabled"
        );
    }

    verdict::dispatch(verdict::evaluate(LineReader::new(), stdin))
}

fn write_or_syntax<Out: Write>(stdout: &mut Out, text: &str) -> ExitStatus {
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => ExitStatus::ZERO,
        Err(_) => ExitStatus::SYNTAX,
    }
}

/// Converts a run's [`ExitStatus`] into a process [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: ExitStatus) -> std::process::ExitCode {
    std::process::ExitCode::from(status)
}
