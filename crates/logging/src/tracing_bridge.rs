//! crates/logging/src/tracing_bridge.rs
//! Installs the stderr formatter that renders `tracing` events.

use std::io;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use super::config::VerbosityConfig;

/// Builds a formatting subscriber for `config` that writes through
/// `make_writer`.
///
/// Lines carry the level and target but no timestamp or ANSI colouring.
pub fn subscriber<W>(config: VerbosityConfig, make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(config.level_filter())
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Installs the global stderr subscriber unless `config` is silent.
///
/// Returns `true` when this call installed the subscriber. A second call, or a
/// call after another global subscriber was set, leaves the existing one in
/// place and returns `false`.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    if config.is_silent() {
        return false;
    }

    tracing::subscriber::set_global_default(subscriber(config, io::stderr)).is_ok()
}
