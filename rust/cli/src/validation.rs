//! Input parsing and validation for the interactive session.
//!
//! This module turns raw prompt lines into session commands:
//! - Move selection (rock, paper, scissors and their one-letter forms)
//! - Best-of changes, with the digits-only check done here and the
//!   odd/positive rule left to the engine
//! - Yes/no answers for confirmation prompts
//!
//! ## Error Handling
//!
//! Parsers return `ParseResult` or `Result<_, String>` carrying a message
//! ready to show the user.

use roshambo_engine::moves::Move;

/// Message shown when a best-of answer is not a plain number.
pub const BEST_OF_NOT_A_NUMBER: &str = "Please enter a positive odd integer.";

/// Result type for parsing one line typed at the session prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Throw a move
    Move(Move),
    /// Change the match length; `None` means ask for the number
    BestOf(Option<String>),
    /// Restart the current match
    Reset,
    /// Show the scoreboard
    Score,
    /// List the commands
    Help,
    /// Leave the session (q, quit or exit)
    Quit,
    /// Blank line
    Empty,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a move name or its first letter (case-insensitive).
///
/// ```rust
/// # use roshambo_cli::validation::parse_move;
/// use roshambo_engine::moves::Move;
///
/// assert_eq!(parse_move("R"), Some(Move::Rock));
/// assert_eq!(parse_move("scissors"), Some(Move::Scissors));
/// assert_eq!(parse_move("lizard"), None);
/// ```
pub fn parse_move(token: &str) -> Option<Move> {
    match token.trim().to_lowercase().as_str() {
        "r" | "rock" => Some(Move::Rock),
        "p" | "paper" => Some(Move::Paper),
        "s" | "scissors" => Some(Move::Scissors),
        _ => None,
    }
}

/// Parse user input at the session prompt.
///
/// Accepts the following input formats (case-insensitive):
/// - "rock"/"r", "paper"/"p", "scissors"/"s" → Move
/// - "best" or "best N" → BestOf
/// - "reset", "score", "help" (or "?")
/// - "q", "quit" or "exit" → Quit
///
/// # Example
///
/// ```rust
/// # use roshambo_cli::validation::{parse_command, ParseResult};
/// use roshambo_engine::moves::Move;
///
/// assert_eq!(parse_command("paper"), ParseResult::Move(Move::Paper));
/// assert_eq!(parse_command("best 5"), ParseResult::BestOf(Some("5".into())));
/// assert_eq!(parse_command("q"), ParseResult::Quit);
///
/// match parse_command("lizard") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Empty;
    };

    if let Some(mv) = parse_move(head) {
        return ParseResult::Move(mv);
    }

    match head {
        "q" | "quit" | "exit" => ParseResult::Quit,
        "best" | "best-of" | "b" => ParseResult::BestOf(parts.get(1).map(|s| s.to_string())),
        "reset" => ParseResult::Reset,
        "score" => ParseResult::Score,
        "help" | "h" | "?" => ParseResult::Help,
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: rock, paper, scissors, best [N], reset, score, help, q",
            head
        )),
    }
}

/// Parse a best-of answer. Only plain digits are accepted here; whether the
/// number is positive and odd is checked by the engine.
///
/// ```rust
/// # use roshambo_cli::validation::parse_best_of;
/// assert_eq!(parse_best_of("7"), Ok(7));
/// assert_eq!(parse_best_of("4"), Ok(4));
/// assert!(parse_best_of("-1").is_err());
/// assert!(parse_best_of("three").is_err());
/// ```
pub fn parse_best_of(input: &str) -> Result<i64, String> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(BEST_OF_NOT_A_NUMBER.to_string());
    }
    input
        .parse::<i64>()
        .map_err(|_| BEST_OF_NOT_A_NUMBER.to_string())
}

/// Parse a yes/no answer; `None` for anything else.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "ok" => Some(true),
        "n" | "no" | "cancel" => Some(false),
        _ => None,
    }
}
