//! Duel orchestration
//!
//! A [`GameSession`] owns both sub-games and the opponent's knowledge; the
//! [`OpponentWorker`] runs opponent turns off the UI thread.

mod error;
mod opponent;
mod outcome;
mod session;

pub use error::GameError;
pub use opponent::{OpponentReply, OpponentWorker};
pub use outcome::{Outcome, Player, Winner};
pub use session::{
    GameSession, GuessOutcome, MAX_ATTEMPTS, Opponent, OpponentTurn, SessionState, SubGame,
    SubGameState,
};
