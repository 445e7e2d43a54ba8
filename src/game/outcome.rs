//! End-of-game result

use super::SubGame;
use crate::core::Word;
use std::fmt;

/// One of the two sides of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Opponent => "opponent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Opponent,
    Draw,
}

/// Final result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Winner,
    pub human_attempts: usize,
    pub opponent_attempts: usize,
    pub human_solved: bool,
    pub opponent_solved: bool,
    pub human_target: Word,
    pub opponent_target: Word,
}

impl Outcome {
    /// Build the outcome of two terminal sub-games
    ///
    /// Solving beats not solving; when both solved, fewer attempts wins.
    pub(crate) fn decide(human: &SubGame, opponent: &SubGame) -> Self {
        let winner = match (human.is_solved(), opponent.is_solved()) {
            (true, true) => match human.attempts().cmp(&opponent.attempts()) {
                std::cmp::Ordering::Less => Winner::Human,
                std::cmp::Ordering::Greater => Winner::Opponent,
                std::cmp::Ordering::Equal => Winner::Draw,
            },
            (true, false) => Winner::Human,
            (false, true) => Winner::Opponent,
            (false, false) => Winner::Draw,
        };

        Self {
            winner,
            human_attempts: human.attempts(),
            opponent_attempts: opponent.attempts(),
            human_solved: human.is_solved(),
            opponent_solved: opponent.is_solved(),
            human_target: human.target().clone(),
            opponent_target: opponent.target().clone(),
        }
    }

    /// One-line summary of who won and how
    #[must_use]
    pub fn summary(&self) -> String {
        let (h, o) = (self.human_attempts, self.opponent_attempts);
        match (self.winner, self.human_solved, self.opponent_solved) {
            (Winner::Human, _, true) => {
                format!("You win! You solved it in {h} attempts, the opponent took {o}.")
            }
            (Winner::Human, _, false) => {
                format!("You win! You solved it in {h} attempts, the opponent failed.")
            }
            (Winner::Opponent, true, _) => {
                format!("The opponent wins! It solved it in {o} attempts, you took {h}.")
            }
            (Winner::Opponent, false, _) => {
                format!("The opponent wins! It solved it in {o} attempts, you failed.")
            }
            (Winner::Draw, true, _) => format!("It's a draw! Both solved in {h} attempts."),
            (Winner::Draw, false, _) => "It's a draw! Neither side solved its word.".to_string(),
        }
    }
}
