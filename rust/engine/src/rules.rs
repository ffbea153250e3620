use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Result of comparing two moves, from the point of view of the argument order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides threw the same move
    Tie,
    /// The first move beats the second
    FirstWins,
    /// The second move beats the first
    SecondWins,
}

impl Outcome {
    /// The outcome seen from the other side of the comparison.
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Tie => "tie",
            Outcome::FirstWins => "first wins",
            Outcome::SecondWins => "second wins",
        }
    }
}

/// Decide a single throw between `a` and `b`.
///
/// Identical moves tie; otherwise the fixed beats-table (Rock > Scissors,
/// Paper > Rock, Scissors > Paper) picks the winner.
///
/// # Example
///
/// ```rust
/// use roshambo_engine::moves::Move;
/// use roshambo_engine::rules::{decide, Outcome};
///
/// assert_eq!(decide(Move::Rock, Move::Scissors), Outcome::FirstWins);
/// assert_eq!(decide(Move::Rock, Move::Paper), Outcome::SecondWins);
/// assert_eq!(decide(Move::Paper, Move::Paper), Outcome::Tie);
/// ```
pub fn decide(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats() == b {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

/// The beats-table as `(winner, loser)` pairs in display order.
pub fn beats_table() -> [(Move, Move); 3] {
    Move::ALL.map(|mv| (mv, mv.beats()))
}
