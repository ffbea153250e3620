//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of each value (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "best_of": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "best_of": {
            "value": config.best_of,
            "source": sources.best_of,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "animation": {
            "value": config.animation,
            "source": sources.animation,
        },
        "spins": {
            "value": config.spins,
            "source": sources.spins,
        },
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
