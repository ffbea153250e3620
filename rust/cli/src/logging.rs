//! Diagnostic logging for the `roshambo` binary.
//!
//! Game output goes to stdout; `tracing` events go to stderr so the two never
//! mix. The filter is read from `ROSHAMBO_LOG` using the usual `EnvFilter`
//! directive syntax (`debug`, `roshambo_engine=trace`, ...).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ROSHAMBO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `ROSHAMBO_LOG`, falling back to warnings only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
