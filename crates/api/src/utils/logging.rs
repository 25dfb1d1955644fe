use std::time::Duration;

use baitulmal_domain::BaitulMalError;
use baitulmal_infra::config::env_bool;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Set to emit JSON log lines instead of the human-readable format
pub const ENV_LOG_JSON: &str = "BAITULMAL_LOG_JSON";

/// Install the global subscriber
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Logs go to stderr so
/// command output on stdout stays clean. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if env_bool(ENV_LOG_JSON, false) {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `BaitulMalError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &BaitulMalError) -> &'static str {
    match error {
        BaitulMalError::Network(_) => "network",
        BaitulMalError::Unauthorized(_) => "unauthorized",
        BaitulMalError::Api(_) => "api",
        BaitulMalError::Config(_) => "config",
        BaitulMalError::Storage(_) => "storage",
        BaitulMalError::NotFound(_) => "not_found",
        BaitulMalError::InvalidInput(_) => "invalid_input",
        BaitulMalError::Validation(_) => "validation",
        BaitulMalError::Internal(_) => "internal",
    }
}
