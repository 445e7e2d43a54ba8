//! Vocabulary word representation
//!
//! A Word stores a fixed-length uppercase word as bytes for feedback calculation.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A fixed-length word drawn from the vocabulary or typed by the human player
///
/// Always stored in uppercase ASCII. Equality is exact letter-sequence match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalised to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    ///
    /// let word = Word::new("earth").unwrap();
    /// assert_eq!(word.text(), "EARTH");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("s0lar").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Set of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> FxHashSet<u8> {
        self.chars.iter().copied().collect()
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct_letters().len()
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("EARTH").unwrap();
        assert_eq!(word.text(), "EARTH");
        assert_eq!(word.chars(), b"EARTH");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("solar").unwrap();
        assert_eq!(word.text(), "SOLAR");

        let word2 = Word::new("SoLaR").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("CARBON"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("JUTE"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("SOLA3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("SOLA ").is_err());
        assert!(Word::new("SOLA!").is_err());
        assert!(matches!(Word::new("SOLÄR"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("OCEAN").unwrap();
        assert_eq!(word.char_at(0), b'O');
        assert_eq!(word.char_at(4), b'N');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("GREEN").unwrap();
        assert!(word.has_letter(b'G'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("GREEN").unwrap().distinct_count(), 4);
        assert_eq!(Word::new("EARTH").unwrap().distinct_count(), 5);
        assert_eq!(Word::new("TREES").unwrap().distinct_count(), 4);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("SEEDS").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "coral".parse().unwrap();
        assert_eq!(format!("{word}"), "CORAL");
    }
}
