//! Tracing setup for the CLI.

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter: `--verbose` forces `debug`, then `RUST_LOG`, then the
/// configured filter.
pub fn build_filter(configured: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Output goes to stderr so command output on
/// stdout stays clean.
pub fn init_tracing(configured: &str, verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(build_filter(configured, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("tracing already initialised: {}", err);
    }
}
