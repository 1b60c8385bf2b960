//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from `VERDICT_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with_filter("info");
}

/// Initialize with an explicit default filter directive, still overridable
/// via `VERDICT_LOG`.
pub fn init_tracing_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_env("VERDICT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
