//! Minimax search over simulated feedback
//!
//! A node is a word. Its children are the feedback buckets that word splits the
//! search pool into, each represented by one member drawn at random. The tree is
//! sampled rather than enumerated, so two runs over the same pool may disagree.
//!
//! Two searches share the skeleton in this module: [`MinimaxStrategy`] folds
//! plain max/min values, [`AlphaBetaStrategy`] carries an alpha/beta window and
//! stops expanding a node once the window closes.

mod alpha_beta;
mod plain;

pub use alpha_beta::AlphaBetaStrategy;
pub use plain::MinimaxStrategy;

use super::entropy::{Partition, score, tied_best};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Only the first this-many pool words are considered as root guesses
pub const CANDIDATE_CAP: usize = 10;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to the recursive value function, root candidates included
    pub nodes: usize,
    /// Nodes valued directly by the scoring function
    pub leaves: usize,
    /// Nodes abandoned early because the alpha/beta window closed
    pub cutoffs: usize,
}

/// Which side chooses at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    pub(crate) const fn flip(self) -> Self {
        match self {
            Self::Maximizing => Self::Minimizing,
            Self::Minimizing => Self::Maximizing,
        }
    }

    /// Starting value before any child has been seen
    pub(crate) const fn identity(self) -> f64 {
        match self {
            Self::Maximizing => f64::NEG_INFINITY,
            Self::Minimizing => f64::INFINITY,
        }
    }

    pub(crate) fn fold(self, best: f64, value: f64) -> f64 {
        match self {
            Self::Maximizing => best.max(value),
            Self::Minimizing => best.min(value),
        }
    }
}

/// How a feedback bucket is valued
pub(crate) enum Step<'p> {
    /// Nothing to learn by branching; value the node's own word
    Score,
    /// Recurse into this representative word
    Descend(&'p Word),
}

/// State threaded through one search
pub(crate) struct SearchContext<'p, 'r, R: Rng + ?Sized> {
    pool: &'p [Word],
    max_depth: usize,
    rng: &'r mut R,
    pub(crate) stats: SearchStats,
}

impl<'p, 'r, R: Rng + ?Sized> SearchContext<'p, 'r, R> {
    pub(crate) fn new(pool: &'p [Word], max_depth: usize, rng: &'r mut R) -> Self {
        Self {
            pool,
            max_depth,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn visit(&mut self) {
        self.stats.nodes += 1;
    }

    pub(crate) const fn is_terminal(&self, depth: usize) -> bool {
        depth >= self.max_depth
    }

    /// Leaf value, always measured against the root pool
    pub(crate) fn leaf(&mut self, word: &Word) -> f64 {
        self.stats.leaves += 1;
        score(word, self.pool)
    }

    pub(crate) fn partition(&self, word: &Word) -> Partition<'p> {
        Partition::new(word, self.pool)
    }

    /// Decide how to value one bucket, drawing its representative if needed
    pub(crate) fn step(&mut self, bucket: &[&'p Word]) -> Step<'p> {
        if bucket.is_empty() || bucket.len() == self.pool.len() {
            return Step::Score;
        }
        match bucket.choose(&mut *self.rng) {
            Some(&next) => Step::Descend(next),
            None => Step::Score,
        }
    }

    /// Value every capped candidate and pick one of the best at random
    pub(crate) fn choose_root<F>(&mut self, mut value_of: F) -> Option<&'p Word>
    where
        F: FnMut(&mut Self, &'p Word) -> f64,
    {
        let pool = self.pool;
        let scored: Vec<(&'p Word, f64)> = candidates(pool)
            .iter()
            .map(|word| (word, value_of(self, word)))
            .collect();

        tied_best(&scored).choose(&mut *self.rng).copied()
    }
}

/// Root guesses considered by the search
#[must_use]
pub fn candidates(pool: &[Word]) -> &[Word] {
    &pool[..pool.len().min(CANDIDATE_CAP)]
}
