//! Logging setup for the CLI.
//!
//! stdout is reserved for payload output; all log lines go to stderr.
//! `RUST_LOG` overrides the verbosity-derived default filter.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber. Safe to call once per process.
pub fn init(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
