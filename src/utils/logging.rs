// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--debug` turns on this crate's
/// per-profile parser events without the dependencies' debug noise.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "info,profile_extractor=debug"
    } else {
        "info"
    }
}

/// Installs the stderr subscriber; stdout is reserved for the JSON result.
pub fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();

    let debug_enabled = debug;
    tracing::debug!("Logging setup complete (debug: {}).", debug_enabled);
}
