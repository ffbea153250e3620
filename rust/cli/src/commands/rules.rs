//! `rules` command: print the beats-table.

use crate::error::CliError;
use crate::formatters::{Symbols, format_move};
use roshambo_engine::rules::beats_table;
use std::io::Write;

pub fn handle_rules_command(symbols: Symbols, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Each move beats exactly one other:")?;
    for (winner, loser) in beats_table() {
        writeln!(
            out,
            "  {} beats {}",
            format_move(winner, symbols),
            format_move(loser, symbols)
        )?;
    }
    writeln!(out, "Identical moves tie.")?;
    Ok(())
}
