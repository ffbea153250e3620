//! UI helper functions for terminal output formatting.
//!
//! Shared prefixes for errors and informational notices.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a titled notice, the terminal stand-in for an info dialog
pub fn display_info(out: &mut dyn Write, title: &str, message: &str) -> std::io::Result<()> {
    writeln!(out, "{}: {}", title, message)
}
