//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{defaults, ObservabilityConfig};

/// Initialize the global tracing subscriber.
///
/// Respects the `IMEOPT_LOG` environment variable for filtering and falls back
/// to the configured level. Returns `false` if a subscriber was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
