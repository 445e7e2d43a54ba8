//! On-screen keyboard letter colouring
//!
//! A key keeps its strongest verdict seen so far: Correct beats Present, which
//! beats Absent.

use crate::core::{Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Keyboard rows, top to bottom
pub const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const fn rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Absent => 0,
        Verdict::Present => 1,
        Verdict::Correct => 2,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess into the key colours
    pub fn update(&mut self, guess: &Word, verdicts: &[Verdict; WORD_LENGTH]) {
        for (&letter, &verdict) in guess.chars().iter().zip(verdicts) {
            self.keys
                .entry(letter)
                .and_modify(|current| {
                    if rank(verdict) > rank(*current) {
                        *current = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }

    /// Colour of a key, `None` if the letter was never played
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn play(keyboard: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        keyboard.update(&guess, &evaluate(&guess, &target));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "SOLAR", "POLAR");
        assert_eq!(keyboard.get(b'O'), Some(Verdict::Correct));

        // O is Present here but the key stays green
        play(&mut keyboard, "OCEAN", "POLAR");
        assert_eq!(keyboard.get(b'O'), Some(Verdict::Correct));
    }

    #[test]
    fn present_upgrades_absent() {
        let mut keyboard = KeyboardState::new();
        // second E of GREEN is Absent, the first is Present
        play(&mut keyboard, "GREEN", "EARTH");
        assert_eq!(keyboard.get(b'E'), Some(Verdict::Present));
        assert_eq!(keyboard.get(b'G'), Some(Verdict::Absent));
    }

    #[test]
    fn unplayed_letters_have_no_colour() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "EARTH", "WATER");
        assert_eq!(keyboard.get(b'Z'), None);
        assert_eq!(keyboard.get(b'a'), Some(Verdict::Correct));

        keyboard.reset();
        assert_eq!(keyboard.get(b'A'), None);
    }

    #[test]
    fn rows_cover_the_alphabet() {
        let letters: usize = ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(letters, 26);
    }
}
