//! Compact feedback pattern encoding
//!
//! A pattern encodes a verdict row using base-3 digits:
//! - 0 = Absent
//! - 1 = Present
//! - 2 = Correct
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Patterns are the bucket keys
//! when a pool is partitioned by the feedback a guess would produce.

use super::verdict::{Verdict, evaluate};
use super::word::{WORD_LENGTH, Word};

/// Feedback pattern for a guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All Correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Word, Pattern};
    ///
    /// let guess = Word::new("CLEAN").unwrap();
    /// let target = Word::new("OCEAN").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // C(present) L(absent) E A N (correct)
    /// // 1 + 0×3 + 2×9 + 2×27 + 2×81 = 235
    /// assert_eq!(pattern.value(), 235);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self::from_verdicts(&evaluate(guess, target))
    }

    /// Encode a verdict row
    #[must_use]
    pub fn from_verdicts(verdicts: &[Verdict; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            pattern += verdict.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode back into a verdict row
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Verdict::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Pattern, Word};
    ///
    /// let guess = Word::new("SOLAR").unwrap();
    /// let target = Word::new("POLAR").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_emoji(), "⬜🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.verdicts().iter().map(|v| v.emoji()).collect()
    }
}
