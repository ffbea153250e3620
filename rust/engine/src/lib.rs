//! # roshambo-engine: Rock-Paper-Scissors Match Core
//!
//! Pure game logic for a best-of-N Rock-Paper-Scissors match between a user
//! and a computer opponent. No I/O and no randomness live here; the
//! presentation layer picks moves and renders results.
//!
//! ## Core Modules
//!
//! - [`moves`] - The three moves and which one each beats
//! - [`rules`] - Decision of a single throw ([`rules::decide`])
//! - [`game`] - Match state machine, scoring and best-of validation
//! - [`errors`] - Error types for match operations
//!
//! ## Quick Start
//!
//! ```rust
//! use roshambo_engine::game::MatchState;
//! use roshambo_engine::moves::Move;
//! use roshambo_engine::rules::Outcome;
//!
//! let mut state = MatchState::new(5).expect("5 is a valid best-of");
//! assert_eq!(state.wins_needed(), 3);
//!
//! let result = state.resolve_round(Move::Paper, Move::Rock).unwrap();
//! assert_eq!(result.outcome, Outcome::FirstWins);
//! assert_eq!((result.score_user, result.score_computer), (1, 0));
//! ```
//!
//! ## Best-of Validation
//!
//! Match lengths must be positive and odd so that a strict majority always
//! decides the match:
//!
//! ```rust
//! use roshambo_engine::game::MatchState;
//!
//! match MatchState::new(4) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => println!("Invalid best-of: {}", e),
//! }
//! ```

pub mod errors;
pub mod game;
pub mod moves;
pub mod rules;
