//! Candidate pool narrowing

use super::KnowledgeBase;
use crate::core::Word;

/// Keep only the words consistent with the knowledge base
///
/// Returns an order-preserving subsequence of `pool`; the input is not modified.
/// The result always contains the true target as long as every fact in `kb`
/// came from real feedback against that target.
///
/// # Examples
/// ```
/// use wordle_duel::core::{Word, evaluate};
/// use wordle_duel::knowledge::{KnowledgeBase, filter};
///
/// let pool: Vec<Word> = ["EARTH", "WATER", "SOLAR", "TERRA"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = Word::new("EARTH").unwrap();
/// let target = Word::new("WATER").unwrap();
/// let mut kb = KnowledgeBase::new();
/// kb.update(&guess, &evaluate(&guess, &target));
///
/// let remaining = filter(&pool, &kb);
/// assert_eq!(remaining, vec![target]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], kb: &KnowledgeBase) -> Vec<Word> {
    pool.iter().filter(|word| kb.admits(word)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::wordlists::Vocabulary;

    fn vocabulary() -> Vec<Word> {
        Vocabulary::embedded().words().to_vec()
    }

    fn learn(kb: &mut KnowledgeBase, guess: &Word, target: &Word) {
        kb.update(guess, &evaluate(guess, target));
    }

    #[test]
    fn empty_knowledge_keeps_everything() {
        let pool = vocabulary();
        assert_eq!(filter(&pool, &KnowledgeBase::new()), pool);
    }

    #[test]
    fn filter_preserves_order() {
        let pool = vocabulary();
        let mut kb = KnowledgeBase::new();
        kb.must_contain.insert(b'A');

        let filtered = filter(&pool, &kb);
        let expected: Vec<Word> = pool.iter().filter(|w| w.has_letter(b'A')).cloned().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_is_idempotent() {
        let pool = vocabulary();
        let target = Word::new("CORAL").unwrap();
        let mut kb = KnowledgeBase::new();
        learn(&mut kb, &Word::new("EARTH").unwrap(), &target);

        let once = filter(&pool, &kb);
        let twice = filter(&once, &kb);
        assert_eq!(once, twice);
    }

    #[test]
    fn target_survives_any_feedback_sequence() {
        let pool = vocabulary();
        for target in &pool {
            let mut kb = KnowledgeBase::new();
            for guess in pool.iter().step_by(7) {
                learn(&mut kb, guess, target);
                assert!(
                    filter(&pool, &kb).contains(target),
                    "{target} dropped after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn excluded_letter_is_strictly_enforced() {
        // A wrongly recorded exclusion must remove the word, even the real target
        let pool = vec![Word::new("CLEAN").unwrap(), Word::new("OZONE").unwrap()];
        let mut kb = KnowledgeBase::new();
        kb.excluded.insert(b'C');

        let filtered = filter(&pool, &kb);
        assert!(!filtered.contains(&Word::new("CLEAN").unwrap()));
        assert_eq!(filtered.len(), 1);
    }
}
