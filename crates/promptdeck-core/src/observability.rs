//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Respects the `PROMPTDECK_LOG` environment variable for filtering,
/// falling back to the configured log level. JSON output when
/// `tracing_enabled` is set, compact text otherwise.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    let level = config.log_level.clone();
    let json = config.tracing_enabled;
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_env("PROMPTDECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        if json {
            builder.json().init();
        } else {
            builder.compact().init();
        }
    });
}
