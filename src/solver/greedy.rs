//! Letter-frequency greedy selection
//!
//! Scores each pool word by how common its distinct letters are across the pool.
//! Runs in a single pass over the pool and never searches ahead.

use super::strategy::Strategy;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Number of pool words containing each letter, counting a word once per letter
#[must_use]
pub fn letter_frequencies(pool: &[Word]) -> FxHashMap<u8, usize> {
    let mut frequencies = FxHashMap::default();
    for word in pool {
        for letter in word.distinct_letters() {
            *frequencies.entry(letter).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Sum of the frequencies of a word's distinct letters
#[must_use]
pub fn frequency_score(word: &Word, frequencies: &FxHashMap<u8, usize>) -> usize {
    word.distinct_letters()
        .iter()
        .map(|letter| frequencies.get(letter).copied().unwrap_or(0))
        .sum()
}

/// Easy opponent: most common letters wins, random tie-break
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Every pool word sharing the highest frequency score, in pool order
    #[must_use]
    pub fn best_words<'a>(&self, pool: &'a [Word]) -> Vec<&'a Word> {
        let frequencies = letter_frequencies(pool);
        let scored: Vec<(&Word, usize)> = pool
            .iter()
            .map(|word| (word, frequency_score(word, &frequencies)))
            .collect();

        let Some(best) = scored.iter().map(|(_, score)| *score).max() else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|(_, score)| *score == best)
            .map(|(word, _)| word)
            .collect()
    }
}

impl Strategy for GreedyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(&self, pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
        self.best_words(pool).choose(rng).copied()
    }
}
