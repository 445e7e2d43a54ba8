//! Guess selection strategies
//!
//! Defines the Strategy trait and the enum used to pick one at runtime.

use super::greedy::GreedyStrategy;
use super::minimax::{AlphaBetaStrategy, MinimaxStrategy, SearchStats};
use crate::core::Word;
use rand::Rng;

/// A strategy for selecting the opponent's next guess from its candidate pool
pub trait Strategy {
    /// Select a guess from `pool`, drawing any randomness from `rng`
    ///
    /// Returns `None` only if the pool is empty.
    fn select_guess<'a, R: Rng + ?Sized>(&self, pool: &'a [Word], rng: &mut R) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter-frequency heuristic, no lookahead
    Greedy(GreedyStrategy),
    /// Minimax without pruning
    Minimax(MinimaxStrategy),
    /// Minimax with alpha-beta pruning
    AlphaBeta(AlphaBetaStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(&self, pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
        match self {
            Self::Greedy(s) => s.select_guess(pool, rng),
            Self::Minimax(s) => s.select_guess(pool, rng),
            Self::AlphaBeta(s) => s.select_guess(pool, rng),
        }
    }
}

impl StrategyType {
    /// Short human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greedy(_) => "greedy",
            Self::Minimax(_) => "minimax",
            Self::AlphaBeta(_) => "alpha-beta",
        }
    }

    /// Select a guess and collect search counters
    ///
    /// The greedy strategy never recurses and always reports empty stats.
    pub fn select_guess_with_stats<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> (Option<&'a Word>, SearchStats) {
        match self {
            Self::Greedy(s) => (s.select_guess(pool, rng), SearchStats::default()),
            Self::Minimax(s) => s.select_guess_with_stats(pool, rng),
            Self::AlphaBeta(s) => s.select_guess_with_stats(pool, rng),
        }
    }
}
