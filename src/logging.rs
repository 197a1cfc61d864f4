//! Tracing setup
//!
//! Host binaries call `init` once at startup. Honors `RUST_LOG`; defaults to
//! warnings and above when unset.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Safe to call from tests and embedders that may race: a second call is a
/// no-op rather than a panic.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
