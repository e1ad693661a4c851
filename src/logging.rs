// Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Verbosity comes from `RUST_LOG` (for example `RUST_LOG=employee_export=debug`)
/// and defaults to `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
