use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three hand shapes a player can throw.
/// Moves carry no identity beyond their tag and are freely copied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Rock (beats Scissors)
    Rock,
    /// Paper (beats Rock)
    Paper,
    /// Scissors (beats Paper)
    Scissors,
}

impl Move {
    /// All moves in display order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_forms_a_cycle() {
        for mv in Move::ALL {
            assert_ne!(mv.beats(), mv);
            assert_eq!(mv.beats().beats().beats(), mv);
        }
    }

    #[test]
    fn every_move_is_beaten_by_exactly_one_other() {
        for mv in Move::ALL {
            let beaten_by = Move::ALL.iter().filter(|m| m.beats() == mv).count();
            assert_eq!(beaten_by, 1, "{} should have exactly one counter", mv);
        }
    }

    #[test]
    fn display_uses_capitalized_name() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Paper.to_string(), "Paper");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
    }
}
