//! Word lists for Scrabble ranking
//!
//! Provides the bundled corpus and dictionary, plus loaders for custom files.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT, DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_count_matches_const() {
        assert_eq!(CORPUS.len(), CORPUS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn corpus_is_lowercase_letters() {
        for &word in CORPUS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_is_sorted_and_unique() {
        assert!(DICTIONARY.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn most_corpus_words_are_playable() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        let playable = CORPUS.iter().filter(|w| dictionary.contains(w)).count();
        assert!(playable > CORPUS_COUNT / 2);
        assert!(playable < CORPUS_COUNT);
    }
}
