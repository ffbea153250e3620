//! Move, scoreboard and announcement formatters for terminal display.
//!
//! Pure functions that turn engine values into the text shown during a
//! session. Moves are drawn with hand emoji when the terminal can render
//! them, and with bracketed letters otherwise.
//!
//! - **Unicode mode**: ✊ ✋ ✌️
//! - **ASCII mode**: [R] [P] [S]
//!
//! ## Example
//!
//! ```rust
//! use roshambo_engine::moves::Move;
//! use roshambo_cli::formatters::{format_move, format_scoreboard, Symbols};
//!
//! assert_eq!(format_move(Move::Rock, Symbols::Ascii), "[R] Rock");
//! assert_eq!(format_scoreboard(2, 1), "You: 2    CPU: 1");
//! ```

use roshambo_engine::game::{RoundResult, Side};
use roshambo_engine::moves::Move;
use roshambo_engine::rules::Outcome;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Glyph set used for moves and decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbols {
    Unicode,
    Ascii,
}

impl Symbols {
    /// Pick the glyph set for this terminal; `force_ascii` always wins.
    pub fn detect(force_ascii: bool) -> Self {
        if force_ascii || !supports_unicode() {
            Symbols::Ascii
        } else {
            Symbols::Unicode
        }
    }

    pub fn glyph(self, mv: Move) -> &'static str {
        match (self, mv) {
            (Symbols::Unicode, Move::Rock) => "✊",
            (Symbols::Unicode, Move::Paper) => "✋",
            (Symbols::Unicode, Move::Scissors) => "✌️",
            (Symbols::Ascii, Move::Rock) => "[R]",
            (Symbols::Ascii, Move::Paper) => "[P]",
            (Symbols::Ascii, Move::Scissors) => "[S]",
        }
    }
}

pub fn format_move(mv: Move, symbols: Symbols) -> String {
    format!("{} {}", symbols.glyph(mv), mv)
}

pub fn format_header(symbols: Symbols) -> &'static str {
    match symbols {
        Symbols::Unicode => "Rock • Paper • Scissors",
        Symbols::Ascii => "Rock - Paper - Scissors",
    }
}

pub fn format_scoreboard(score_user: u32, score_computer: u32) -> String {
    format!("You: {}    CPU: {}", score_user, score_computer)
}

/// Announcement line for a resolved round, e.g. `Round 2: You win this round!`
pub fn format_round_announcement(result: &RoundResult) -> String {
    let verdict = match result.outcome {
        Outcome::Tie => "It's a tie.",
        Outcome::FirstWins => "You win this round!",
        Outcome::SecondWins => "CPU wins this round.",
    };
    format!("Round {}: {}", result.round, verdict)
}

pub fn format_match_winner(winner: Side, symbols: Symbols) -> String {
    match (winner, symbols) {
        (Side::User, Symbols::Unicode) => "You won the match! 🎉".to_string(),
        (Side::User, Symbols::Ascii) => "You won the match!".to_string(),
        (Side::Computer, Symbols::Unicode) => "CPU won the match. 😵".to_string(),
        (Side::Computer, Symbols::Ascii) => "CPU won the match.".to_string(),
    }
}

/// One-line verdict for a standalone comparison of two moves.
///
/// ```rust
/// use roshambo_engine::moves::Move;
/// use roshambo_engine::rules::Outcome;
/// use roshambo_cli::formatters::format_judgement;
///
/// assert_eq!(
///     format_judgement(Move::Rock, Move::Scissors, Outcome::FirstWins),
///     "Rock vs Scissors: first wins (Rock beats Scissors)"
/// );
/// ```
pub fn format_judgement(first: Move, second: Move, outcome: Outcome) -> String {
    match outcome {
        Outcome::Tie => format!("{} vs {}: tie", first, second),
        Outcome::FirstWins => format!(
            "{} vs {}: {} ({} beats {})",
            first,
            second,
            outcome.as_str(),
            first,
            second
        ),
        Outcome::SecondWins => format!(
            "{} vs {}: {} ({} beats {})",
            first,
            second,
            outcome.as_str(),
            second,
            first
        ),
    }
}
