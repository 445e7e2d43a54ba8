//! Minimax with alpha-beta pruning

use super::{Role, SearchContext, SearchStats, Step};
use crate::core::Word;
use crate::solver::strategy::Strategy;
use log::trace;
use rand::Rng;

/// Minimax that abandons a node once its alpha/beta window closes
///
/// Each root candidate starts from a fresh `(-inf, +inf)` window, so bounds
/// only tighten inside one candidate's subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaStrategy {
    pub max_depth: usize,
}

impl AlphaBetaStrategy {
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
        let mut ctx = SearchContext::new(pool, self.max_depth, rng);
        let guess = ctx.choose_root(|ctx, word| {
            value(ctx, word, 1, f64::NEG_INFINITY, f64::INFINITY, Role::Minimizing)
        });
        (guess, ctx.stats)
    }

    /// Value of playing `word` first, as the root would compute it
    pub fn root_value<R: Rng + ?Sized>(
        &self,
        word: &Word,
        pool: &[Word],
        rng: &mut R,
    ) -> (f64, SearchStats) {
        let mut ctx = SearchContext::new(pool, self.max_depth, rng);
        let value = value(
            &mut ctx,
            word,
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
            Role::Minimizing,
        );
        (value, ctx.stats)
    }
}

impl Strategy for AlphaBetaStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(&self, pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
        self.select_guess_with_stats(pool, rng).0
    }
}

fn value<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, '_, R>,
    word: &Word,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
    role: Role,
) -> f64 {
    ctx.visit();
    if ctx.is_terminal(depth) {
        return ctx.leaf(word);
    }

    let partition = ctx.partition(word);
    let mut best = role.identity();
    for (pattern, bucket) in partition.buckets() {
        let child = match ctx.step(bucket) {
            Step::Score => ctx.leaf(word),
            Step::Descend(next) => value(ctx, next, depth + 1, alpha, beta, role.flip()),
        };
        best = role.fold(best, child);

        match role {
            Role::Maximizing => alpha = alpha.max(child),
            Role::Minimizing => beta = beta.min(child),
        }
        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            trace!(
                "cutoff under {word} at depth {depth} after {} ({alpha:.3} >= {beta:.3})",
                pattern.to_emoji()
            );
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::score;
    use crate::solver::minimax::{MinimaxStrategy, candidates};
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn no_cutoffs_at_depth_two() {
        // Only the minimising root tightens beta; alpha stays at -inf
        let pool = Vocabulary::embedded().words().to_vec();
        let mut rng = StdRng::seed_from_u64(11);

        let (guess, stats) = AlphaBetaStrategy::new(2).select_guess_with_stats(&pool, &mut rng);
        assert!(guess.is_some());
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn prunes_at_depth_three() {
        // Every guess splits this pool into singletons, so the tree is fixed and
        // every grandchild scores the same
        let pool = words(&["EARTH", "SOLAR", "CLEAN"]);

        let mut rng = StdRng::seed_from_u64(0);
        let (pruned_value, pruned) = AlphaBetaStrategy::new(3).root_value(&pool[0], &pool, &mut rng);

        let mut rng = StdRng::seed_from_u64(0);
        let (plain_value, plain) = MinimaxStrategy::new(3).root_value(&pool[0], &pool, &mut rng);

        assert!((pruned_value - plain_value).abs() < 1e-12);
        // first child is fully expanded, the other two stop after one leaf
        assert_eq!(pruned.nodes, 9);
        assert_eq!(pruned.cutoffs, 2);
        assert_eq!(plain.nodes, 13);
    }

    #[test]
    fn depth_one_value_is_the_score() {
        let pool = words(&["EARTH", "SOLAR", "CLEAN", "OCEAN"]);
        let mut rng = StdRng::seed_from_u64(0);

        let (value, _) = AlphaBetaStrategy::new(1).root_value(&pool[3], &pool, &mut rng);
        assert!((value - score(&pool[3], &pool)).abs() < 1e-12);
    }

    #[test]
    fn guess_comes_from_capped_candidates() {
        let pool = Vocabulary::embedded().words().to_vec();
        for seed in 0..3 {
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = AlphaBetaStrategy::new(3).select_guess(&pool, &mut rng).unwrap();
            assert!(candidates(&pool).contains(guess));
        }
    }

    #[test]
    fn same_seed_same_guess() {
        let pool = Vocabulary::embedded().words().to_vec();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            AlphaBetaStrategy::new(2)
                .select_guess(&pool, &mut rng)
                .cloned()
        };
        assert_eq!(pick(42), pick(42));
    }
}
