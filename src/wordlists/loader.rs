//! Word list loading utilities
//!
//! Provides functions to load the corpus and dictionary from files or from
//! the embedded constants. Entries are trimmed and lowercased; corpus entries
//! that still are not plain `a`-`z` words are skipped and counted.

use crate::core::Word;
use crate::pipeline::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Words accepted from a list, plus how many entries were rejected
#[derive(Debug, Clone, Default)]
pub struct LoadedWords {
    pub words: Vec<Word>,
    pub rejected: usize,
}

/// Load corpus words from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use shakespeare_scrabble::wordlists::loader::load_from_file;
///
/// let loaded = load_from_file("data/corpus.txt").unwrap();
/// println!("Loaded {} words", loaded.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadedWords> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let loaded = words_from_lines(content.lines());

    debug!(
        path = %path.display(),
        words = loaded.words.len(),
        rejected = loaded.rejected,
        "Loaded corpus file"
    );
    Ok(loaded)
}

/// Load a dictionary from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = dictionary_from_lines(content.lines());

    debug!(path = %path.display(), words = dictionary.len(), "Loaded dictionary file");
    Ok(dictionary)
}

/// Convert embedded string slice to corpus words
///
/// # Examples
/// ```
/// use shakespeare_scrabble::wordlists::loader::words_from_slice;
/// use shakespeare_scrabble::wordlists::CORPUS;
///
/// let loaded = words_from_slice(CORPUS);
/// assert_eq!(loaded.words.len(), CORPUS.len());
/// assert_eq!(loaded.rejected, 0);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> LoadedWords {
    words_from_lines(slice.iter().copied())
}

/// Convert embedded string slice to a dictionary
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    dictionary_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> LoadedWords {
    let mut loaded = LoadedWords::default();

    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        match Word::new(line.to_lowercase()) {
            Ok(word) => loaded.words.push(word),
            Err(e) => {
                debug!(entry = line, error = %e, "Skipping corpus entry");
                loaded.rejected += 1;
            }
        }
    }

    if loaded.rejected > 0 {
        warn!(
            rejected = loaded.rejected,
            "Skipped corpus entries that are not plain a-z words"
        );
    }
    loaded
}

fn dictionary_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Dictionary {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(loaded: &LoadedWords) -> Vec<&str> {
        loaded.words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let loaded = words_from_slice(&["brevity", "soul", "wit"]);

        assert_eq!(texts(&loaded), vec!["brevity", "soul", "wit"]);
        assert_eq!(loaded.rejected, 0);
    }

    #[test]
    fn words_from_slice_lowercases() {
        let loaded = words_from_slice(&["Hamlet", " DENMARK "]);
        assert_eq!(texts(&loaded), vec!["hamlet", "denmark"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let loaded = words_from_slice(&["summer's", "day", "heart-ache", "", "   ", "sleep"]);

        // Blank lines are ignored, malformed words are counted
        assert_eq!(texts(&loaded), vec!["day", "sleep"]);
        assert_eq!(loaded.rejected, 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let loaded = words_from_slice(&[]);
        assert!(loaded.words.is_empty());
        assert_eq!(loaded.rejected, 0);
    }

    #[test]
    fn dictionary_from_slice_normalizes() {
        let dictionary = dictionary_from_slice(&["Rose", " thorn", ""]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("rose"));
        assert!(dictionary.contains("thorn"));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "To\nbe\n\nor\nnot\nto\nbe,").unwrap();

        let loaded = load_from_file(file.path()).unwrap();
        assert_eq!(texts(&loaded), vec!["to", "be", "or", "not", "to"]);
        assert_eq!(loaded.rejected, 1);
    }

    #[test]
    fn load_dictionary_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aa\naah\naahed").unwrap();

        let dictionary = load_dictionary(file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("aah"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
        assert!(load_dictionary(dir.path().join("missing.txt")).is_err());
    }
}
