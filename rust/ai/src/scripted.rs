//! Opponent that replays a fixed sequence of moves.

use crate::ComputerOpponent;
use roshambo_engine::moves::Move;

/// Cycles through `moves` in order, wrapping at the end.
/// An empty script falls back to Rock.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves, next: 0 }
    }
}

impl ComputerOpponent for ScriptedOpponent {
    fn choose_move(&mut self) -> Move {
        if self.moves.is_empty() {
            return Move::Rock;
        }
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        "ScriptedOpponent"
    }
}
