//! Raw word-list parsing
//!
//! A list holds one entry per line. Blank lines and `#` comments are ignored.
//! Entries that are not five ASCII letters are recorded with their position and
//! left out of the result, so a hand-edited list never stops start-up.

use crate::core::{Word, WordError};
use log::{Level, log};
use std::fs;
use std::io;
use std::path::Path;

/// An entry that could not become a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based position of the entry, the line number when read from a file
    pub line: usize,
    pub entry: String,
    pub reason: WordError,
}

/// Valid words plus everything that was left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub words: Vec<Word>,
    pub rejected: Vec<Rejected>,
}

impl ParsedList {
    /// Parse entries in order
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::WordError;
    /// use wordle_duel::wordlists::loader::ParsedList;
    ///
    /// let parsed = ParsedList::from_entries(["# sea words", "coral", "CARBON", "", "OCEAN"]);
    /// assert_eq!(parsed.words.len(), 2);
    /// assert_eq!(parsed.rejected[0].line, 3);
    /// assert_eq!(parsed.rejected[0].reason, WordError::InvalidLength(6));
    /// ```
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut parsed = Self::default();
        for (index, raw) in entries.into_iter().enumerate() {
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match Word::new(entry) {
                Ok(word) => parsed.words.push(word),
                Err(reason) => parsed.rejected.push(Rejected {
                    line: index + 1,
                    entry: entry.to_string(),
                    reason,
                }),
            }
        }
        parsed
    }

    /// Log each rejected entry at `level`, prefixed with `origin`
    pub fn report(&self, origin: &str, level: Level) {
        for rejected in &self.rejected {
            log!(
                level,
                "{origin}:{}: skipping '{}': {}",
                rejected.line,
                rejected.entry,
                rejected.reason
            );
        }
    }
}

/// Read and parse a word-per-line file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_list<P: AsRef<Path>>(path: P) -> io::Result<ParsedList> {
    let content = fs::read_to_string(path)?;
    Ok(ParsedList::from_entries(content.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn entries_are_normalised_and_kept_in_order() {
        let parsed = ParsedList::from_entries(["  earth ", "Solar", "WATER"]);

        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["EARTH", "SOLAR", "WATER"]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn rejected_entries_keep_line_and_reason() {
        let parsed = ParsedList::from_entries(["EARTH", "CLIMATE", "# comment", "JUTE", "C0RAL"]);

        assert_eq!(parsed.words, vec![Word::new("EARTH").unwrap()]);
        let summary: Vec<(usize, &str, &WordError)> = parsed
            .rejected
            .iter()
            .map(|r| (r.line, r.entry.as_str(), &r.reason))
            .collect();
        assert_eq!(
            summary,
            [
                (2, "CLIMATE", &WordError::InvalidLength(7)),
                (4, "JUTE", &WordError::InvalidLength(4)),
                (5, "C0RAL", &WordError::InvalidCharacters),
            ]
        );
    }

    #[test]
    fn blank_and_comment_lines_are_not_rejections() {
        let parsed = ParsedList::from_entries(["", "   ", "# OZONE", "#"]);
        assert_eq!(parsed, ParsedList::default());
    }

    #[test]
    fn file_lines_are_numbered_from_one() {
        let path = env::temp_dir().join(format!("wordle_duel_loader_{}.txt", std::process::id()));
        fs::write(&path, "# biome list\nTUNDRA\nmarsh\n\nSWAMP\n").unwrap();

        let parsed = read_list(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line, 2);
        assert_eq!(parsed.rejected[0].entry, "TUNDRA");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_list("definitely/not/here.txt").is_err());
    }
}
