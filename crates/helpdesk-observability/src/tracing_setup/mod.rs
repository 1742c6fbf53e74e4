//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use helpdesk_core::config::defaults::DEFAULT_LOG_LEVEL;
use helpdesk_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "HELPDESK_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `HELPDESK_LOG`; defaults to `info`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    install(resolve_filter(DEFAULT_LOG_LEVEL))
}

/// Like [`init_tracing`] but falls back to the configured level.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    install(resolve_filter(&config.log_level))
}

/// Initialize tracing with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

fn resolve_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}
