//! Minimax without pruning

use super::{Role, SearchContext, SearchStats, Step, candidates};
use crate::core::Word;
use crate::solver::entropy::{rank_by_score, tied_best};
use crate::solver::strategy::Strategy;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Plain minimax to a fixed depth
///
/// At depth 1 every root candidate is a leaf, so the search reduces to scoring
/// the capped candidates directly; that case is scored in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    pub max_depth: usize,
}

impl MinimaxStrategy {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Select a guess and report how much of the tree was visited
    pub fn select_guess_with_stats<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> (Option<&'a Word>, SearchStats) {
        if self.max_depth <= 1 {
            let roots: Vec<&Word> = candidates(pool).iter().collect();
            let ranked = rank_by_score(&roots, pool);
            let stats = SearchStats {
                nodes: ranked.len(),
                leaves: ranked.len(),
                cutoffs: 0,
            };
            return (tied_best(&ranked).choose(rng).copied(), stats);
        }

        let mut ctx = SearchContext::new(pool, self.max_depth, rng);
        let guess = ctx.choose_root(|ctx, word| value(ctx, word, 1, Role::Minimizing));
        (guess, ctx.stats)
    }

    /// Minimax value of playing `word` first, as the root would compute it
    pub fn root_value<R: Rng + ?Sized>(
        &self,
        word: &Word,
        pool: &[Word],
        rng: &mut R,
    ) -> (f64, SearchStats) {
        let mut ctx = SearchContext::new(pool, self.max_depth, rng);
        let value = value(&mut ctx, word, 1, Role::Minimizing);
        (value, ctx.stats)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(&self, pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
        self.select_guess_with_stats(pool, rng).0
    }
}

fn value<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, '_, R>,
    word: &Word,
    depth: usize,
    role: Role,
) -> f64 {
    ctx.visit();
    if ctx.is_terminal(depth) {
        return ctx.leaf(word);
    }

    let partition = ctx.partition(word);
    let mut best = role.identity();
    for (_, bucket) in partition.buckets() {
        let child = match ctx.step(bucket) {
            Step::Score => ctx.leaf(word),
            Step::Descend(next) => value(ctx, next, depth + 1, role.flip()),
        };
        best = role.fold(best, child);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::score;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn depth_one_picks_a_top_scoring_candidate() {
        let pool = Vocabulary::embedded().words().to_vec();
        let mut rng = StdRng::seed_from_u64(3);

        let (guess, stats) = MinimaxStrategy::new(1).select_guess_with_stats(&pool, &mut rng);
        let guess = guess.unwrap();

        let best = candidates(&pool)
            .iter()
            .map(|w| score(w, &pool))
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((score(guess, &pool) - best).abs() < 1e-9);
        assert!(candidates(&pool).contains(guess));
        assert_eq!(stats.nodes, 10);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn depth_one_value_is_the_score() {
        let pool = words(&["EARTH", "SOLAR", "CLEAN", "OCEAN"]);
        let mut rng = StdRng::seed_from_u64(0);

        let (value, stats) = MinimaxStrategy::new(1).root_value(&pool[2], &pool, &mut rng);
        assert!((value - score(&pool[2], &pool)).abs() < 1e-12);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn deeper_search_visits_every_bucket() {
        // Every guess splits this pool into singletons, so the tree is fixed
        let pool = words(&["EARTH", "SOLAR", "CLEAN"]);
        let mut rng = StdRng::seed_from_u64(0);

        let (_, stats) = MinimaxStrategy::new(3).root_value(&pool[0], &pool, &mut rng);
        // root + 3 children + 9 leaves
        assert_eq!(stats.nodes, 13);
        assert_eq!(stats.leaves, 9);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn uninformative_guess_is_scored_directly() {
        // FUNGI shares no letter with either word: one bucket holding the whole pool
        let pool = words(&["EARTH", "WATER"]);
        let fungi = Word::new("FUNGI").unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let (value, stats) = MinimaxStrategy::new(2).root_value(&fungi, &pool, &mut rng);
        assert!((value - score(&fungi, &pool)).abs() < 1e-12);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.leaves, 1);
    }

    #[test]
    fn guess_comes_from_capped_candidates() {
        let pool = Vocabulary::embedded().words().to_vec();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = MinimaxStrategy::new(2).select_guess(&pool, &mut rng).unwrap();
            assert!(candidates(&pool).contains(guess));
        }
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(MinimaxStrategy::new(2).select_guess(&[], &mut rng).is_none());
        assert!(MinimaxStrategy::new(1).select_guess(&[], &mut rng).is_none());
    }
}
