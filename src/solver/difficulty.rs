//! Opponent difficulty levels

use super::greedy::GreedyStrategy;
use super::minimax::{AlphaBetaStrategy, MinimaxStrategy};
use super::strategy::StrategyType;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How hard the computer opponent plays
///
/// Chosen before or between games; it selects the search strategy and depth
/// but is not part of a game's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    /// Greedy letter-frequency heuristic
    Easy,
    /// Minimax, depth 1
    #[default]
    Medium,
    /// Minimax with alpha-beta pruning, depth 2
    Hard,
    /// Minimax with alpha-beta pruning, depth 3, fixed opening words
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Search depth, counting the root guess as depth 1
    #[must_use]
    pub const fn max_depth(self) -> usize {
        match self {
            Self::Easy | Self::Medium => 1,
            Self::Hard => 2,
            Self::Expert => 3,
        }
    }

    #[must_use]
    pub const fn uses_pruning(self) -> bool {
        matches!(self, Self::Hard | Self::Expert)
    }

    /// Whether the first opponent turn skips search for a fixed opener
    #[must_use]
    pub const fn uses_openers(self) -> bool {
        matches!(self, Self::Expert)
    }

    /// Simulated time the opponent spends "thinking" before its guess appears
    #[must_use]
    pub const fn thinking_delay(self) -> Duration {
        Duration::from_millis(match self {
            Self::Easy => 800,
            Self::Medium => 1200,
            Self::Hard => 1800,
            Self::Expert => 2500,
        })
    }

    #[must_use]
    pub const fn strategy(self) -> StrategyType {
        match self {
            Self::Easy => StrategyType::Greedy(GreedyStrategy),
            Self::Medium => StrategyType::Minimax(MinimaxStrategy::new(self.max_depth())),
            Self::Hard | Self::Expert => {
                StrategyType::AlphaBeta(AlphaBetaStrategy::new(self.max_depth()))
            }
        }
    }

    /// The next level, wrapping from Expert back to Easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Expert,
            Self::Expert => Self::Easy,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised difficulty name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
