//! Per-letter feedback and the guess evaluator

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter is in the target at this position
    Correct,
    /// Letter is in the target at another position
    Present,
    /// Letter is not in the target (or all its occurrences are already accounted for)
    Absent,
}

impl Verdict {
    /// Base-3 digit used by [`Pattern`](super::Pattern) encoding
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Verdict::digit`]; any digit above 2 is treated as Correct
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Correct,
        }
    }

    /// Single-character symbol: G, Y or -
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// True for Correct or Present
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compare a guess against a target and produce one verdict per position
///
/// Two passes with consume-once bookkeeping so repeated letters are never over-counted:
/// 1. Exact matches become Correct and consume their target slot
/// 2. Remaining guess letters become Present if an unconsumed target slot holds the
///    same letter (the leftmost one is consumed), Absent otherwise
///
/// # Examples
/// ```
/// use wordle_duel::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("EERIE").unwrap();
/// let target = Word::new("EAGER").unwrap();
///
/// // Only two E's in EAGER: one Correct, one Present, the third Absent
/// assert_eq!(
///     evaluate(&guess, &target),
///     [Verdict::Correct, Verdict::Present, Verdict::Present, Verdict::Absent, Verdict::Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [Verdict; WORD_LENGTH] {
    let mut result = [Verdict::Absent; WORD_LENGTH];
    let mut remaining: [Option<u8>; WORD_LENGTH] = (*target.chars()).map(Some);

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = Verdict::Correct;
            remaining[i] = None;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
            result[i] = Verdict::Present;
            *slot = None;
        }
    }

    result
}

/// Render a verdict row as symbols, e.g. "GY--G"
#[must_use]
pub fn verdicts_to_string(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.symbol()).collect()
}
