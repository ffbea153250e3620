//! Uniform random opponent.

use crate::ComputerOpponent;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roshambo_engine::moves::Move;
use tracing::trace;

/// Picks each move with probability 1/3, independently every round.
///
/// The RNG is seeded from a `u64`, so the same seed always yields the same
/// sequence of moves.
///
/// ```rust
/// use roshambo_ai::random::RandomOpponent;
/// use roshambo_ai::ComputerOpponent;
///
/// let mut a = RandomOpponent::new(7);
/// let mut b = RandomOpponent::new(7);
/// assert_eq!(a.choose_move(), b.choose_move());
/// ```
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha20Rng,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ComputerOpponent for RandomOpponent {
    fn choose_move(&mut self) -> Move {
        let mv = Move::ALL[self.rng.random_range(0..Move::ALL.len())];
        trace!(?mv, "random opponent picked");
        mv
    }

    fn name(&self) -> &str {
        "RandomOpponent"
    }
}
