//! Wordle Duel
//!
//! A human and a computer opponent race to solve two different hidden words.
//! The opponent narrows its candidate pool from feedback and picks guesses by
//! letter frequency, entropy-scored minimax or alpha-beta search depending on
//! the difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::{Verdict, Word, evaluate};
//!
//! let guess = Word::new("earth").unwrap();
//! let target = Word::new("water").unwrap();
//!
//! let verdicts = evaluate(&guess, &target);
//! assert_eq!(verdicts[1], Verdict::Correct);
//! ```

// Core domain types
pub mod core;

// What feedback has revealed and candidate filtering
pub mod knowledge;

// Guess selection algorithms
pub mod solver;

// Session rules and the background opponent
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
