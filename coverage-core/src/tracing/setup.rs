//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "COVERAGE_LOG";

/// Initialize the coverage tracing/logging system.
///
/// Reads `COVERAGE_LOG` for filter directives, e.g.
/// `COVERAGE_LOG=coverage_validation=trace`.
///
/// Falls back to `coverage=info` if `COVERAGE_LOG` is not set or is invalid.
/// Calling it more than once is a no-op, and it never replaces a global
/// subscriber installed by the host application.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("coverage=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
