//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use roshambo_engine::moves::Move;

#[derive(Parser, Debug)]
#[command(
    name = "roshambo",
    version,
    about = "Rock-Paper-Scissors against the computer, best of N"
)]
pub struct RoshamboCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive best-of-N match
    Play {
        /// Match length; must be positive and odd
        #[arg(long, allow_negative_numbers = true)]
        best_of: Option<i64>,
        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,
        /// Reveal the computer's move without the preview animation
        #[arg(long)]
        no_animation: bool,
        /// Number of preview frames before each reveal
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=50))]
        spins: Option<u8>,
        /// Draw moves with ASCII letters instead of emoji
        #[arg(long)]
        ascii: bool,
    },
    /// Show which move beats which
    Rules,
    /// Decide a single throw between two moves
    Judge {
        #[arg(value_enum)]
        first: MoveArg,
        #[arg(value_enum)]
        second: MoveArg,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MoveArg {
    #[value(alias = "r")]
    Rock,
    #[value(alias = "p")]
    Paper,
    #[value(alias = "s")]
    Scissors,
}

impl From<MoveArg> for Move {
    fn from(arg: MoveArg) -> Self {
        match arg {
            MoveArg::Rock => Move::Rock,
            MoveArg::Paper => Move::Paper,
            MoveArg::Scissors => Move::Scissors,
        }
    }
}
