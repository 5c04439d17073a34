// ABOUTME: Opt-in debug logging for the calculator binaries
// Logs go to stderr so stdout carries only the computed result

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cloud_cost=debug";

/// Installs a stderr fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_debug_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in another program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
