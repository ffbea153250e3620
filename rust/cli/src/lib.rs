//! # Roshambo CLI Library
//!
//! This library provides the command-line interface for the roshambo
//! Rock-Paper-Scissors engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["roshambo", "play", "--best-of", "5"];
//! let code = roshambo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive best-of-N match against the computer
//! - `rules`: Show the beats-table
//! - `judge`: Decide a single throw between two moves
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, RoshamboCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_judge_command, handle_play_command,
    handle_rules_command,
};
use formatters::Symbols;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["roshambo", "judge", "rock", "scissors"];
/// let code = roshambo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "rules", "judge", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RoshamboCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }

            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Roshambo CLI");
            write_or_exit!(err, "Usage: roshambo <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: roshambo --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            best_of,
            seed,
            no_animation,
            spins,
            ascii,
        } => match config::load() {
            Ok(cfg) => {
                let opts = PlayOptions::from(&cfg)
                    .with_overrides(best_of, seed, no_animation, spins, ascii);
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(opts, out, err, &mut stdin_lock)
            }
            Err(e) => Err(CliError::Config(e.to_string())),
        },
        Commands::Rules => handle_rules_command(Symbols::detect(false), out),
        Commands::Judge {
            first,
            second,
            json,
        } => handle_judge_command(first.into(), second.into(), json, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
