//! `judge` command: decide one throw outside of a match.

use crate::error::CliError;
use crate::formatters::format_judgement;
use roshambo_engine::moves::Move;
use roshambo_engine::rules::{Outcome, decide};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Judgement {
    first: Move,
    second: Move,
    outcome: Outcome,
}

/// Decide `first` against `second` and print the verdict, as text or JSON.
pub fn handle_judge_command(
    first: Move,
    second: Move,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = decide(first, second);
    if json {
        let judgement = Judgement {
            first,
            second,
            outcome,
        };
        let line = serde_json::to_string(&judgement).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", format_judgement(first, second, outcome))?;
    }
    Ok(())
}
