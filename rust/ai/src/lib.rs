//! # roshambo-ai: Computer Opponents
//!
//! Move selection for the computer side of a Rock-Paper-Scissors match.
//! Opponents never see the user's move; each round is an independent pick.
//!
//! ## Core Components
//!
//! - [`ComputerOpponent`] - Trait for anything that can pick the computer's move
//! - [`random`] - Uniform random opponent backed by a seeded ChaCha20 RNG
//! - [`scripted`] - Opponent that replays a fixed sequence of moves
//! - [`create_ai`] - Factory for opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use roshambo_ai::{create_ai, ComputerOpponent};
//!
//! let mut ai = create_ai("random", 42).expect("known opponent");
//! let mv = ai.choose_move();
//! println!("{} threw {}", ai.name(), mv);
//! ```

use roshambo_engine::moves::Move;

pub mod random;
pub mod scripted;

/// Trait implemented by every computer opponent.
///
/// # Example Implementation
///
/// ```rust
/// use roshambo_ai::ComputerOpponent;
/// use roshambo_engine::moves::Move;
///
/// struct AlwaysRock;
///
/// impl ComputerOpponent for AlwaysRock {
///     fn choose_move(&mut self) -> Move {
///         Move::Rock
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysRock"
///     }
/// }
/// ```
pub trait ComputerOpponent {
    /// Pick the move for the next round.
    fn choose_move(&mut self) -> Move;

    /// Return the name/identifier of this opponent.
    fn name(&self) -> &str;
}

/// Create an opponent by type string.
///
/// Supported types:
/// - `"random"` - [`random::RandomOpponent`] seeded with `seed`
///
/// Returns `None` for unknown types.
///
/// ```rust
/// use roshambo_ai::create_ai;
///
/// assert_eq!(create_ai("random", 1).unwrap().name(), "RandomOpponent");
/// assert!(create_ai("oracle", 1).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn ComputerOpponent>> {
    match ai_type {
        "random" => Some(Box::new(random::RandomOpponent::new(seed))),
        _ => None,
    }
}
