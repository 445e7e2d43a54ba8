//! Terminal output formatting
//!
//! Display utilities for CLI results, the text duel and pretty-printing.

pub mod display;
pub mod formatters;
pub mod keyboard;

pub use display::{
    print_analysis_result, print_benchmark_results, print_board, print_keyboard, print_outcome,
    print_solve_result, print_word_bank,
};
pub use keyboard::KeyboardState;
