//! Parallel scoring of candidate guesses

use super::score::score;
use crate::core::Word;
use rayon::prelude::*;

/// Tolerance under which two scores are considered tied
pub const SCORE_EPSILON: f64 = 1e-9;

/// Score every candidate against the pool
///
/// Scores are computed in parallel; the returned vector keeps candidate order.
///
/// # Examples
/// ```
/// use wordle_duel::core::Word;
/// use wordle_duel::solver::entropy::rank_by_score;
///
/// let pool: Vec<Word> = ["SOLAR", "POLAR", "CORAL"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = pool.iter().collect();
///
/// let ranked = rank_by_score(&candidates, &pool);
/// assert_eq!(ranked.len(), 3);
/// assert_eq!(ranked[0].0.text(), "SOLAR");
/// ```
#[must_use]
pub fn rank_by_score<'a>(candidates: &[&'a Word], pool: &[Word]) -> Vec<(&'a Word, f64)> {
    candidates
        .par_iter()
        .map(|&guess| (guess, score(guess, pool)))
        .collect()
}

/// All entries sharing the maximum value, in their original order
///
/// Returns an empty vector only when `scored` is empty.
#[must_use]
pub fn tied_best<'a>(scored: &[(&'a Word, f64)]) -> Vec<&'a Word> {
    let Some(best) = scored
        .iter()
        .map(|(_, value)| *value)
        .max_by(f64::total_cmp)
    else {
        return Vec::new();
    };

    scored
        .iter()
        .filter(|(_, value)| (best - value).abs() <= SCORE_EPSILON)
        .map(|(word, _)| *word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn rank_keeps_candidate_order() {
        let pool = words(&["EARTH", "WATER", "TERRA", "OCEAN"]);
        let candidates: Vec<&Word> = pool.iter().rev().collect();

        let ranked = rank_by_score(&candidates, &pool);
        let order: Vec<&str> = ranked.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, vec!["OCEAN", "TERRA", "WATER", "EARTH"]);
    }

    #[test]
    fn tied_best_returns_every_maximum() {
        let pool = words(&["EARTH", "WATER", "TERRA"]);
        let scored = vec![(&pool[0], 1.5), (&pool[1], 0.5), (&pool[2], 1.5)];

        let best = tied_best(&scored);
        assert_eq!(best, vec![&pool[0], &pool[2]]);
    }

    #[test]
    fn tied_best_of_nothing_is_empty() {
        assert!(tied_best(&[]).is_empty());
    }

    #[test]
    fn tied_best_handles_negative_infinity() {
        let pool = words(&["EARTH", "WATER"]);
        let scored = vec![(&pool[0], f64::NEG_INFINITY), (&pool[1], 0.25)];
        assert_eq!(tied_best(&scored), vec![&pool[1]]);
    }
}
