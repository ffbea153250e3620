use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::GameError;
use crate::moves::Move;
use crate::rules::{decide, Outcome};

/// Best-of length used when nothing else is configured.
pub const DEFAULT_BEST_OF: u32 = 3;

/// One of the two participants in a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Side {
    /// The human player
    User,
    /// The computer opponent
    Computer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Finished,
}

/// Everything the presentation layer needs to render a resolved round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub user_move: Move,
    pub computer_move: Move,
    /// Outcome with the user as the first mover
    pub outcome: Outcome,
    /// 1-based round number within the current match
    pub round: u32,
    pub score_user: u32,
    pub score_computer: u32,
    pub finished: bool,
    /// Set only when this round finished the match
    pub winner: Option<Side>,
}

/// Check a requested best-of length and narrow it to the counter type.
///
/// Accepts positive odd values only.
///
/// ```rust
/// use roshambo_engine::game::validate_best_of;
///
/// assert_eq!(validate_best_of(5), Ok(5));
/// assert!(validate_best_of(4).is_err());
/// assert!(validate_best_of(-1).is_err());
/// ```
pub fn validate_best_of(best_of: i64) -> Result<u32, GameError> {
    match u32::try_from(best_of) {
        Ok(n) if n % 2 == 1 => Ok(n),
        _ => Err(GameError::InvalidBestOf { value: best_of }),
    }
}

/// Wins required to take a best-of-`best_of` match (a strict majority).
pub fn wins_needed_for(best_of: u32) -> u32 {
    best_of / 2 + 1
}

/// Score and round bookkeeping for a best-of-N series between the user and
/// the computer.
///
/// The match is terminal once either score reaches [`wins_needed`]; further
/// rounds are rejected with [`GameError::MatchAlreadyFinished`] until
/// [`reset`] or [`configure`] is called.
///
/// [`wins_needed`]: MatchState::wins_needed
/// [`reset`]: MatchState::reset
/// [`configure`]: MatchState::configure
///
/// # Examples
///
/// ```
/// use roshambo_engine::game::{MatchState, Side};
/// use roshambo_engine::moves::Move;
///
/// let mut state = MatchState::new(3).unwrap();
/// state.resolve_round(Move::Rock, Move::Scissors).unwrap();
/// let last = state.resolve_round(Move::Paper, Move::Rock).unwrap();
///
/// assert!(last.finished);
/// assert_eq!(state.winner(), Some(Side::User));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchState {
    best_of: u32,
    wins_needed: u32,
    score_user: u32,
    score_computer: u32,
    /// Rounds resolved since the last reset
    round: u32,
    status: MatchStatus,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::with_best_of(DEFAULT_BEST_OF)
    }
}

impl MatchState {
    pub fn new(best_of: i64) -> Result<Self, GameError> {
        let best_of = validate_best_of(best_of)?;
        Ok(Self::with_best_of(best_of))
    }

    fn with_best_of(best_of: u32) -> Self {
        Self {
            best_of,
            wins_needed: wins_needed_for(best_of),
            score_user: 0,
            score_computer: 0,
            round: 0,
            status: MatchStatus::InProgress,
        }
    }

    /// Start a fresh match of a new length. Invalid lengths leave the
    /// current match untouched.
    pub fn configure(&mut self, best_of: i64) -> Result<(), GameError> {
        let best_of = validate_best_of(best_of)?;
        *self = Self::with_best_of(best_of);
        info!(best_of, wins_needed = self.wins_needed, "match configured");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.score_user = 0;
        self.score_computer = 0;
        self.round = 0;
        self.status = MatchStatus::InProgress;
        debug!(best_of = self.best_of, "match reset");
    }

    pub fn resolve_round(
        &mut self,
        user_move: Move,
        computer_move: Move,
    ) -> Result<RoundResult, GameError> {
        if self.is_finished() {
            return Err(GameError::MatchAlreadyFinished);
        }

        self.round += 1;
        let outcome = decide(user_move, computer_move);
        match outcome {
            Outcome::FirstWins => self.score_user += 1,
            Outcome::SecondWins => self.score_computer += 1,
            Outcome::Tie => {}
        }
        debug!(
            round = self.round,
            ?user_move,
            ?computer_move,
            ?outcome,
            "round resolved"
        );

        if self.score_user >= self.wins_needed || self.score_computer >= self.wins_needed {
            self.status = MatchStatus::Finished;
            info!(
                score_user = self.score_user,
                score_computer = self.score_computer,
                rounds = self.round,
                "match finished"
            );
        }

        Ok(RoundResult {
            user_move,
            computer_move,
            outcome,
            round: self.round,
            score_user: self.score_user,
            score_computer: self.score_computer,
            finished: self.is_finished(),
            winner: self.winner(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Winner of a finished match, `None` while the match is in progress.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }
        // A strict majority makes equal scores unreachable here; the
        // computer is the fallback.
        if self.score_user > self.score_computer {
            Some(Side::User)
        } else {
            Some(Side::Computer)
        }
    }

    pub fn best_of(&self) -> u32 {
        self.best_of
    }
    pub fn wins_needed(&self) -> u32 {
        self.wins_needed
    }
    pub fn score_user(&self) -> u32 {
        self.score_user
    }
    pub fn score_computer(&self) -> u32 {
        self.score_computer
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn status(&self) -> MatchStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_best_of_three() {
        let state = MatchState::default();
        assert_eq!(state.best_of(), 3);
        assert_eq!(state.wins_needed(), 2);
        assert_eq!(state.status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_wins_needed_is_strict_majority() {
        assert_eq!(wins_needed_for(1), 1);
        assert_eq!(wins_needed_for(3), 2);
        assert_eq!(wins_needed_for(5), 3);
        assert_eq!(wins_needed_for(7), 4);
    }

    #[test]
    fn test_validate_rejects_values_outside_u32() {
        let too_big = i64::from(u32::MAX) + 2;
        assert_eq!(
            validate_best_of(too_big),
            Err(GameError::InvalidBestOf { value: too_big })
        );
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert_eq!(
            validate_best_of(0),
            Err(GameError::InvalidBestOf { value: 0 })
        );
    }

    #[test]
    fn test_tie_counts_round_but_not_score() {
        let mut state = MatchState::default();
        let result = state.resolve_round(Move::Rock, Move::Rock).unwrap();
        assert_eq!(result.outcome, Outcome::Tie);
        assert_eq!(result.round, 1);
        assert_eq!((result.score_user, result.score_computer), (0, 0));
        assert!(!result.finished);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_computer_can_win() {
        let mut state = MatchState::new(1).unwrap();
        let result = state.resolve_round(Move::Rock, Move::Paper).unwrap();
        assert_eq!(result.outcome, Outcome::SecondWins);
        assert!(result.finished);
        assert_eq!(result.winner, Some(Side::Computer));
    }

    #[test]
    fn test_failed_configure_keeps_scores() {
        let mut state = MatchState::new(5).unwrap();
        state.resolve_round(Move::Paper, Move::Rock).unwrap();
        assert!(state.configure(2).is_err());
        assert_eq!(state.best_of(), 5);
        assert_eq!(state.score_user(), 1);
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn test_configure_restarts_finished_match() {
        let mut state = MatchState::new(1).unwrap();
        state.resolve_round(Move::Scissors, Move::Paper).unwrap();
        assert!(state.is_finished());

        state.configure(7).unwrap();
        assert!(!state.is_finished());
        assert_eq!(state.wins_needed(), 4);
        assert_eq!(state.score_user(), 0);
        assert_eq!(state.round(), 0);
    }
}
