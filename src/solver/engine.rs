//! Opponent search engine
//!
//! Chooses the opponent's next guess from its candidate pool according to the
//! difficulty: a fixed opener on Expert's first turn, a random pick for tiny
//! pools, otherwise the difficulty's strategy.

use super::difficulty::Difficulty;
use super::minimax::SearchStats;
use crate::core::Word;
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// High-diversity opening words played on Expert's first turn
pub const STRATEGIC_OPENERS: [&str; 4] = ["EARTH", "SOLAR", "WATER", "CLEAN"];

/// Pools this small are guessed at random without scoring
pub const RANDOM_POOL_LIMIT: usize = 2;

/// How a guess was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// Expert's fixed first-turn word
    Opener,
    /// Uniform pick from a tiny pool
    Random,
    /// The difficulty's strategy
    Search,
    /// Random vocabulary word after the pool ran dry
    Fallback,
}

/// A chosen guess plus how it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub guess: Word,
    pub source: GuessSource,
    pub stats: SearchStats,
}

/// Stateless dispatcher from difficulty to guess selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine {
    difficulty: Difficulty,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pick the opponent's next guess
    ///
    /// `turn` is the number of guesses the opponent has already made. Returns
    /// `None` only for an empty pool.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_duel::solver::{Difficulty, STRATEGIC_OPENERS, SearchEngine};
    /// use wordle_duel::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// let mut rng = StdRng::seed_from_u64(9);
    ///
    /// let engine = SearchEngine::new(Difficulty::Expert);
    /// let opener = engine.next_guess(vocabulary.words(), 0, &mut rng).unwrap();
    /// assert!(STRATEGIC_OPENERS.contains(&opener.text()));
    /// ```
    pub fn next_guess<R: Rng + ?Sized>(&self, pool: &[Word], turn: usize, rng: &mut R) -> Option<Word> {
        self.decide(pool, turn, rng).map(|decision| decision.guess)
    }

    /// Like [`next_guess`](Self::next_guess), also reporting how the guess was found
    pub fn decide<R: Rng + ?Sized>(&self, pool: &[Word], turn: usize, rng: &mut R) -> Option<Decision> {
        if pool.is_empty() {
            return None;
        }

        // Checked before the small-pool pick: the first guess is always an opener
        if turn == 0 && self.difficulty.uses_openers() {
            let opener = STRATEGIC_OPENERS
                .choose(rng)
                .and_then(|text| Word::new(*text).ok());
            if let Some(guess) = opener {
                debug!("{} opener: {guess}", self.difficulty);
                return Some(Decision {
                    guess,
                    source: GuessSource::Opener,
                    stats: SearchStats::default(),
                });
            }
        }

        if pool.len() <= RANDOM_POOL_LIMIT {
            let guess = pool.choose(rng)?.clone();
            debug!("{} random pick from {} candidates: {guess}", self.difficulty, pool.len());
            return Some(Decision {
                guess,
                source: GuessSource::Random,
                stats: SearchStats::default(),
            });
        }

        let strategy = self.difficulty.strategy();
        let (guess, stats) = strategy.select_guess_with_stats(pool, rng);
        let guess = guess?.clone();
        debug!(
            "{} {} over {} candidates: {guess} ({} nodes, {} cutoffs)",
            self.difficulty,
            strategy.name(),
            pool.len(),
            stats.nodes,
            stats.cutoffs
        );

        Some(Decision {
            guess,
            source: GuessSource::Search,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        for level in Difficulty::ALL {
            assert!(SearchEngine::new(level).next_guess(&[], 3, &mut rng).is_none());
        }
    }

    #[test]
    fn expert_opens_with_strategic_word() {
        let pool = Vocabulary::embedded().words().to_vec();
        let engine = SearchEngine::new(Difficulty::Expert);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = engine.decide(&pool, 0, &mut rng).unwrap();
            assert_eq!(decision.source, GuessSource::Opener);
            assert!(STRATEGIC_OPENERS.contains(&decision.guess.text()));
        }
    }

    #[test]
    fn opener_only_on_first_turn() {
        let pool = Vocabulary::embedded().words().to_vec();
        let mut rng = StdRng::seed_from_u64(1);
        let decision = SearchEngine::new(Difficulty::Expert)
            .decide(&pool, 1, &mut rng)
            .unwrap();
        assert_eq!(decision.source, GuessSource::Search);
    }

    #[test]
    fn other_levels_never_use_openers() {
        let pool = Vocabulary::embedded().words().to_vec();
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut rng = StdRng::seed_from_u64(2);
            let decision = SearchEngine::new(level).decide(&pool, 0, &mut rng).unwrap();
            assert_eq!(decision.source, GuessSource::Search);
        }
    }

    #[test]
    fn tiny_pools_are_guessed_at_random() {
        let pool = words(&["SOLAR", "POLAR"]);
        for level in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(4);
            let decision = SearchEngine::new(level).decide(&pool, 2, &mut rng).unwrap();
            assert_eq!(decision.source, GuessSource::Random);
            assert!(pool.contains(&decision.guess));
        }
    }

    #[test]
    fn expert_opener_wins_over_tiny_pool() {
        let pool = words(&["SMOKE", "STEAM"]);
        let engine = SearchEngine::new(Difficulty::Expert);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = engine.decide(&pool, 0, &mut rng).unwrap();
            assert_eq!(decision.source, GuessSource::Opener);
            assert!(STRATEGIC_OPENERS.contains(&decision.guess.text()));
        }
    }

    #[test]
    fn easy_never_searches() {
        let pool = Vocabulary::embedded().words().to_vec();
        let mut rng = StdRng::seed_from_u64(8);
        let decision = SearchEngine::new(Difficulty::Easy)
            .decide(&pool, 0, &mut rng)
            .unwrap();

        assert_eq!(decision.source, GuessSource::Search);
        assert_eq!(decision.stats, SearchStats::default());
    }

    #[test]
    fn search_guess_is_in_pool() {
        let pool = Vocabulary::embedded().words().to_vec();
        for level in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(6);
            let guess = SearchEngine::new(level).next_guess(&pool, 1, &mut rng).unwrap();
            assert!(pool.contains(&guess), "{level} guessed {guess}");
        }
    }
}
