#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` configures the diagnostics that `exitline` may write to standard
//! error. Diagnostics are opt-in: a [`VerbosityConfig`] built from the number
//! of `-v` flags selects a [`LevelFilter`](tracing::level_filters::LevelFilter),
//! and [`init_tracing`] installs a `tracing-subscriber` formatter only when the
//! level is above zero. A silent configuration never touches any stream.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//! use tracing::level_filters::LevelFilter;
//!
//! assert!(VerbosityConfig::default().is_silent());
//! assert_eq!(VerbosityConfig::from_verbose_level(2).level_filter(), LevelFilter::DEBUG);
//! ```

mod config;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use tracing_bridge::{init_tracing, subscriber};
