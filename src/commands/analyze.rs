//! Word analysis command
//!
//! Shows how the opponent would rate a word against a candidate pool.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, ScoreBreakdown, calculate_metrics, score_breakdown};
use crate::solver::greedy::{frequency_score, letter_frequencies};
use crate::solver::{Difficulty, SearchStats, StrategyType};
use anyhow::{Result, anyhow, bail};
use rand::Rng;

/// Value a difficulty's search assigns to the word
pub struct DifficultyValue {
    pub difficulty: Difficulty,
    pub value: f64,
    pub stats: SearchStats,
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    pub metrics: GuessMetrics,
    pub score: ScoreBreakdown,
    pub frequency_score: usize,
    pub expected_reduction: f64,
    pub search_values: Vec<DifficultyValue>,
}

/// Analyze a word against a pool of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The candidate pool is empty
pub fn analyze_word<R: Rng + ?Sized>(
    word: &str,
    candidates: &[Word],
    rng: &mut R,
) -> Result<AnalysisResult> {
    let word = Word::new(word).map_err(|e| anyhow!("invalid word: {e}"))?;
    if candidates.is_empty() {
        bail!("no candidates to analyze against");
    }

    let metrics = calculate_metrics(&word, candidates);
    let frequencies = letter_frequencies(candidates);

    let search_values = Difficulty::ALL
        .into_iter()
        .filter_map(|difficulty| {
            let (value, stats) = match difficulty.strategy() {
                StrategyType::Greedy(_) => return None,
                StrategyType::Minimax(s) => s.root_value(&word, candidates, rng),
                StrategyType::AlphaBeta(s) => s.root_value(&word, candidates, rng),
            };
            Some(DifficultyValue {
                difficulty,
                value,
                stats,
            })
        })
        .collect();

    Ok(AnalysisResult {
        total_candidates: candidates.len(),
        score: score_breakdown(&word, candidates),
        frequency_score: frequency_score(&word, &frequencies),
        expected_reduction: metrics.entropy.exp2(),
        metrics,
        search_values,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::score;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn analyze_vocabulary_word() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(0);

        let result = analyze_word("earth", vocabulary.words(), &mut rng).unwrap();

        assert_eq!(result.word.text(), "EARTH");
        assert_eq!(result.total_candidates, vocabulary.len());
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!((result.score.membership - 0.1).abs() < 1e-12);
        assert!(result.frequency_score > 0);
    }

    #[test]
    fn outsider_word_is_allowed() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(0);

        let outsider = Word::new("MIGHT").unwrap();
        assert!(!vocabulary.contains(&outsider));

        let result = analyze_word("might", vocabulary.words(), &mut rng).unwrap();
        assert!(result.score.membership.abs() < f64::EPSILON);
    }

    #[test]
    fn one_value_per_searching_difficulty() {
        let pool: Vec<Word> = ["SOLAR", "POLAR", "CORAL", "OCEAN"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut rng = StdRng::seed_from_u64(4);

        let result = analyze_word("solar", &pool, &mut rng).unwrap();
        let difficulties: Vec<Difficulty> =
            result.search_values.iter().map(|v| v.difficulty).collect();
        assert_eq!(
            difficulties,
            vec![Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
        );

        // Depth one is the plain score
        let medium = &result.search_values[0];
        assert!((medium.value - score(&result.word, &pool)).abs() < 1e-9);
        assert_eq!(medium.stats.nodes, 1);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(analyze_word("four", vocabulary.words(), &mut rng).is_err());
        assert!(analyze_word("earth", &[], &mut rng).is_err());
    }
}
