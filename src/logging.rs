//! Diagnostic logging.
//!
//! Logs go to stderr so stdout carries only calculator results. The
//! `RUST_LOG` environment variable takes precedence over the configured
//! level:
//!
//! ```bash
//! RUST_LOG=tabcalc=trace tabcalc mean 1 2 3 x
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}

