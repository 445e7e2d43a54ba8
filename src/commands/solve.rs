//! Word solving command
//!
//! Lets the opponent play alone against a chosen target and records each turn.

use crate::core::{Verdict, WORD_LENGTH, Word};
use crate::game::{MAX_ATTEMPTS, Opponent};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Difficulty, GuessSource, SearchEngine, SearchStats};
use anyhow::{Result, anyhow, bail};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, difficulty: Difficulty) -> Self {
        Self {
            target,
            difficulty,
            max_guesses: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
    pub difficulty: Difficulty,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub verdicts: [Verdict; WORD_LENGTH],
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub source: GuessSource,
    pub stats: SearchStats,
}

/// Solve a specific word the way the opponent would
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the vocabulary
pub fn solve_word<R: Rng + ?Sized>(
    config: &SolveConfig,
    vocabulary: &[Word],
    rng: &mut R,
) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .map_err(|e| anyhow!("invalid target word: {e}"))?;
    if !vocabulary.contains(&target) {
        bail!("'{target}' is not in the word list");
    }

    Ok(solve_target(&target, config.difficulty, config.max_guesses, vocabulary, rng))
}

/// Play the opponent against a known-valid target
pub fn solve_target<R: Rng + ?Sized>(
    target: &Word,
    difficulty: Difficulty,
    max_guesses: usize,
    vocabulary: &[Word],
    rng: &mut R,
) -> SolveResult {
    let engine = SearchEngine::new(difficulty);
    let mut opponent = Opponent::new(target.clone(), vocabulary);
    let mut guesses = Vec::new();

    for turn in 0..max_guesses.min(MAX_ATTEMPTS) {
        let candidates_before = opponent.pool().len();
        let Some(decision) = engine.decide(opponent.pool(), turn, rng) else {
            break;
        };

        let entropy =
            (candidates_before > 1).then(|| calculate_entropy(&decision.guess, opponent.pool()));
        let verdicts = opponent.play(decision.guess.clone(), vocabulary);

        guesses.push(GuessStep {
            word: decision.guess,
            verdicts,
            candidates_before,
            candidates_after: opponent.pool().len(),
            entropy,
            source: decision.source,
            stats: decision.stats,
        });

        if opponent.sub_game().is_terminal() {
            break;
        }
    }

    SolveResult {
        success: opponent.sub_game().is_solved(),
        guesses,
        target: target.clone(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_word_records_history() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(1);
        let config = SolveConfig::new("coral".to_string(), Difficulty::Medium);

        let result = solve_word(&config, vocabulary.words(), &mut rng).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= MAX_ATTEMPTS);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        if result.success {
            assert_eq!(result.guesses.last().unwrap().word.text(), "CORAL");
        }
    }

    #[test]
    fn target_never_leaves_the_pool() {
        let vocabulary = Vocabulary::embedded();
        for difficulty in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(13);
            let target = Word::new("FLORA").unwrap();
            let result = solve_target(&target, difficulty, MAX_ATTEMPTS, vocabulary.words(), &mut rng);

            for step in &result.guesses {
                assert!(step.candidates_after >= 1, "{difficulty} lost the target");
                assert_ne!(step.source, GuessSource::Fallback);
            }
        }
    }

    #[test]
    fn expert_starts_with_opener() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(2);
        let target = Word::new("WHALE").unwrap();

        let result = solve_target(&target, Difficulty::Expert, MAX_ATTEMPTS, vocabulary.words(), &mut rng);
        assert_eq!(result.guesses[0].source, GuessSource::Opener);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(0);

        let config = SolveConfig::new("zzzzz".to_string(), Difficulty::Easy);
        assert!(solve_word(&config, vocabulary.words(), &mut rng).is_err());

        let config = SolveConfig::new("tree".to_string(), Difficulty::Easy);
        assert!(solve_word(&config, vocabulary.words(), &mut rng).is_err());
    }

    #[test]
    fn respects_max_guesses() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(0);
        let mut config = SolveConfig::new("smoke".to_string(), Difficulty::Easy);
        config.max_guesses = 2;

        let result = solve_word(&config, vocabulary.words(), &mut rng).unwrap();
        assert!(result.guesses.len() <= 2);
    }
}
