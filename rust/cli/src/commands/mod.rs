//! Command handler modules for the roshambo CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`, `&mut dyn BufRead`) passed in, never opened inside
//! - Errors propagated via `CliError`; `run` prints them and picks the exit code

mod cfg;
mod judge;
pub mod play;
mod rules;

pub use cfg::handle_cfg_command;
pub use judge::handle_judge_command;
pub use play::{PlayOptions, PlaySession, SessionStats, handle_play_command};
pub use rules::handle_rules_command;
