use super::Player;
use crate::core::WordError;
use thiserror::Error;

/// Errors returned by a [`GameSession`](super::GameSession)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("the {0}'s game is already over")]
    AlreadyTerminal(Player),
    #[error("it is not the {0}'s turn")]
    OutOfTurn(Player),
    #[error("the game is still in progress")]
    NotTerminal,
    #[error("need at least two distinct words to draw targets, got {0}")]
    VocabularyTooSmall(usize),
}
