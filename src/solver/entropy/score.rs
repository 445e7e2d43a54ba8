//! Guess desirability score
//!
//! Weighted sum of expected information gain, a bonus for guesses that could
//! themselves be the answer, and a letter-diversity bonus.

use super::calculator::calculate_entropy;
use crate::core::{WORD_LENGTH, Word};

/// Raw bonus for a guess that is still a pool member, before weighting
pub const MEMBERSHIP_BONUS: f64 = 0.1;

/// Fixed policy weights for combining the score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub information: f64,
    pub membership: f64,
    pub diversity: f64,
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self {
        information: 0.7,
        membership: 0.1,
        diversity: 0.2,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unweighted components of a score and their weighted total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Entropy of the feedback partition, in bits
    pub information_gain: f64,
    /// `MEMBERSHIP_BONUS` if the guess is in the pool, else 0
    pub membership: f64,
    /// Distinct letters divided by word length
    pub diversity: f64,
    pub total: f64,
}

/// Score a guess against the current pool with explicit weights
#[must_use]
pub fn score_breakdown_with(guess: &Word, pool: &[Word], weights: ScoreWeights) -> ScoreBreakdown {
    let information_gain = calculate_entropy(guess, pool);
    let membership = if pool.contains(guess) {
        MEMBERSHIP_BONUS
    } else {
        0.0
    };
    let diversity = guess.distinct_count() as f64 / WORD_LENGTH as f64;

    let total = information_gain * weights.information
        + membership * weights.membership
        + diversity * weights.diversity;

    ScoreBreakdown {
        information_gain,
        membership,
        diversity,
        total,
    }
}

/// Score a guess against the current pool with the default weights
#[must_use]
pub fn score_breakdown(guess: &Word, pool: &[Word]) -> ScoreBreakdown {
    score_breakdown_with(guess, pool, ScoreWeights::DEFAULT)
}

/// Desirability of `guess` given the current pool; higher is better
///
/// # Examples
/// ```
/// use wordle_duel::core::Word;
/// use wordle_duel::solver::entropy::score;
///
/// let pool: Vec<Word> = ["SOLAR", "POLAR", "CORAL", "OCEAN"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// // A pool member that splits every word apart beats one that barely splits
/// let good = score(&pool[0], &pool);
/// let bad = score(&Word::new("FUNGI").unwrap(), &pool);
/// assert!(good > bad);
/// ```
#[must_use]
pub fn score(guess: &Word, pool: &[Word]) -> f64 {
    score_breakdown(guess, pool).total
}
