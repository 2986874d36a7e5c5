//! Structured logging with environment variable configuration.
//!
//! Logs go to stderr; stdout is reserved for written paths and, with
//! `--stdout`, the generated modules themselves.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `BDD_PYTEST_LOG_LEVEL`
/// 3. Default configuration value
///
/// A second call is a no-op: the first installed subscriber stays active.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // Ignore error if a subscriber is already set (e.g., in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
