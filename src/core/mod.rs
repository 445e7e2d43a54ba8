//! Core domain types for the word game
//!
//! Words, per-letter verdicts and the guess evaluator. Everything here is pure
//! and deterministic.

mod pattern;
mod verdict;
mod word;

pub use pattern::Pattern;
pub use verdict::{Verdict, evaluate, verdicts_to_string};
pub use word::{WORD_LENGTH, Word, WordError};
