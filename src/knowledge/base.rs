//! Accumulated constraints about a hidden target
//!
//! Facts are only ever appended during a game; a fresh base is created per game.

use crate::core::{Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// What a verdict revealed about a letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactStatus {
    /// The letter is at this position
    ConfirmedHere,
    /// The letter is in the word but not at this position
    ForbiddenHere,
}

/// A letter fact attached to a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionalFact {
    pub letter: u8,
    pub status: FactStatus,
}

/// Constraints derived from the feedback history of one player's guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    /// Letters confirmed present somewhere in the target
    pub must_contain: FxHashSet<u8>,
    /// Per-position facts in the order they were learned
    pub positional_facts: [Vec<PositionalFact>; WORD_LENGTH],
    /// Letters confirmed absent from the target
    pub excluded: FxHashSet<u8>,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its verdict row into the base
    ///
    /// An Absent letter is only excluded globally when no other position of the
    /// same guess marked it Correct or Present. The check scans the whole guess,
    /// including later positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Word, evaluate};
    /// use wordle_duel::knowledge::KnowledgeBase;
    ///
    /// let guess = Word::new("GREEN").unwrap();
    /// let target = Word::new("EARTH").unwrap();
    ///
    /// let mut kb = KnowledgeBase::new();
    /// kb.update(&guess, &evaluate(&guess, &target));
    ///
    /// // One E is Present, the other Absent: E stays allowed
    /// assert!(kb.must_contain.contains(&b'E'));
    /// assert!(!kb.excluded.contains(&b'E'));
    /// assert!(kb.excluded.contains(&b'G'));
    /// ```
    pub fn update(&mut self, guess: &Word, verdicts: &[Verdict; WORD_LENGTH]) {
        for (i, (&letter, &verdict)) in guess.chars().iter().zip(verdicts).enumerate() {
            match verdict {
                Verdict::Correct => {
                    self.must_contain.insert(letter);
                    self.positional_facts[i].push(PositionalFact {
                        letter,
                        status: FactStatus::ConfirmedHere,
                    });
                }
                Verdict::Present => {
                    self.must_contain.insert(letter);
                    self.positional_facts[i].push(PositionalFact {
                        letter,
                        status: FactStatus::ForbiddenHere,
                    });
                }
                Verdict::Absent => {
                    let hit_elsewhere = guess
                        .chars()
                        .iter()
                        .zip(verdicts)
                        .enumerate()
                        .any(|(j, (&other, v))| j != i && other == letter && v.is_hit());

                    if !hit_elsewhere {
                        self.excluded.insert(letter);
                    }
                }
            }
        }
    }

    /// Letter confirmed at a position, if any
    #[must_use]
    pub fn confirmed_at(&self, position: usize) -> Option<u8> {
        self.positional_facts[position]
            .iter()
            .find(|fact| fact.status == FactStatus::ConfirmedHere)
            .map(|fact| fact.letter)
    }

    /// Check whether a word is consistent with every recorded constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if !self.must_contain.iter().all(|&letter| word.has_letter(letter)) {
            return false;
        }

        for (position, facts) in self.positional_facts.iter().enumerate() {
            let letter = word.char_at(position);
            let consistent = facts.iter().all(|fact| match fact.status {
                FactStatus::ConfirmedHere => letter == fact.letter,
                FactStatus::ForbiddenHere => letter != fact.letter,
            });
            if !consistent {
                return false;
            }
        }

        !word.chars().iter().any(|letter| self.excluded.contains(letter))
    }

    /// Forget everything, ready for a new game
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.must_contain.is_empty()
            && self.excluded.is_empty()
            && self.positional_facts.iter().all(Vec::is_empty)
    }
}
