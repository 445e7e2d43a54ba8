//! Formatting utilities for terminal output

use crate::core::{Verdict, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Format a verdict row as emoji tiles
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}

/// A single letter on a coloured background
#[must_use]
pub fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.white().bold(),
    }
}

/// A played word as a row of coloured tiles
#[must_use]
pub fn verdict_row(word: &Word, verdicts: &[Verdict; WORD_LENGTH]) -> String {
    word.chars()
        .iter()
        .zip(verdicts)
        .map(|(&letter, &verdict)| tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// A row not played yet
#[must_use]
pub fn empty_row() -> String {
    " · ".repeat(WORD_LENGTH).bright_black().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits.max(f64::EPSILON), width)
}

/// "1 attempt", "3 attempts"
#[must_use]
pub fn attempts_label(count: usize) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn emoji_row_for_mixed_feedback() {
        let guess = Word::new("EARTH").unwrap();
        let target = Word::new("WATER").unwrap();
        assert_eq!(verdicts_to_emoji(&evaluate(&guess, &target)), "🟨🟩🟨🟨⬜");
    }

    #[test]
    fn emoji_row_all_green() {
        let word = Word::new("SOLAR").unwrap();
        assert_eq!(verdicts_to_emoji(&evaluate(&word, &word)), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn verdict_row_contains_every_letter() {
        colored::control::set_override(false);
        let guess = Word::new("OCEAN").unwrap();
        let target = Word::new("CLEAN").unwrap();
        assert_eq!(verdict_row(&guess, &evaluate(&guess, &target)), " O  C  E  A  N ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn attempts_are_pluralised() {
        assert_eq!(attempts_label(1), "1 attempt");
        assert_eq!(attempts_label(4), "4 attempts");
    }
}
