use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Number must be positive and odd, got {value}")]
    InvalidBestOf { value: i64 },
    #[error("Match is over. Reset to play again or change Best-of.")]
    MatchAlreadyFinished,
}
