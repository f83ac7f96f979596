//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVE: &str = "secbadge=warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
