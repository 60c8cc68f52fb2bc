use std::time::Duration;

use rolodex_domain::RolodexError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from config) is used.
/// Output goes to stderr so stdout stays parseable with `--json`.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"favorites::add"`, never
/// user input.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RolodexError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RolodexError) -> &'static str {
    match error {
        RolodexError::Storage(_) => "storage",
        RolodexError::Config(_) => "config",
        RolodexError::Network(_) => "network",
        RolodexError::NotFound(_) => "not_found",
        RolodexError::InvalidInput(_) => "invalid_input",
        RolodexError::Serialization(_) => "serialization",
        RolodexError::Internal(_) => "internal",
    }
}
