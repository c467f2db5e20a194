//! Diagnostic logging for the `chatstats` binary.
//!
//! The library only emits `tracing` events. This module installs the
//! subscriber that prints them, on stderr so stdout stays reserved for the
//! report.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt};

/// Maps the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging with environment-based filtering.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`.
/// Calling this more than once is harmless: later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
