//! Word lists for the duel
//!
//! The vocabulary is compiled into the binary and loaded once at start-up.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};

use crate::core::Word;
use loader::ParsedList;
use log::{Level, debug};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Immutable set of same-length words that targets and opponent guesses are drawn from
///
/// Keeps first-seen order and drops duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
    dropped: usize,
}

impl Vocabulary {
    /// Build from already-validated words, dropping duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let mut dropped = 0;
        let words = words
            .into_iter()
            .filter(|word| {
                let fresh = seen.insert(word.clone());
                if !fresh {
                    debug!("dropping duplicate word {word}");
                    dropped += 1;
                }
                fresh
            })
            .collect();
        Self { words, dropped }
    }

    /// The compiled-in vocabulary
    ///
    /// Its raw list carries a few entries of other lengths; they are dropped
    /// quietly.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_list(
            ParsedList::from_entries(VOCABULARY.iter().copied()),
            "embedded",
            Level::Debug,
        )
    }

    /// Load from a word-per-line file, warning about every entry left out
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let parsed = loader::read_list(path)?;
        Ok(Self::from_list(parsed, &path.display().to_string(), Level::Warn))
    }

    fn from_list(parsed: ParsedList, origin: &str, level: Level) -> Self {
        parsed.report(origin, level);
        let rejected = parsed.rejected.len();
        let mut vocabulary = Self::new(parsed.words);
        vocabulary.dropped += rejected;
        vocabulary
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Raw entries left out: invalid words and repeats
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}
