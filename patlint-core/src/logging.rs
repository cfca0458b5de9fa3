//! Structured logging using **tracing**.
//!
//! The JSON subscriber writes machine-readable events to stderr, keeping
//! stdout clean for report output. Filtering follows the standard
//! `RUST_LOG` convention (e.g. `RUST_LOG=patlint=debug`).

use tracing::{error, info, warn};

/// Initializes the global tracing collector (subscriber).
///
/// Call this *once* at the beginning of the process. Configures structured
/// JSON output to stderr.
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}
