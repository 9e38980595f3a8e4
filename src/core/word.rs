//! Scrabble word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Anything else is
//! rejected here, so the scoring code never has to deal with letters it
//! cannot index into the letter tables.

use super::Letter;
use std::fmt;

/// A validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Word must contain only lowercase ASCII letters, got {character:?} at position {position}"
            ),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is taken as-is: case folding is the caller's job.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::core::Word;
    ///
    /// let word = Word::new("quartz").unwrap();
    /// assert_eq!(word.text(), "quartz");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("Quartz").is_err());
    /// assert!(Word::new("summer's").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(character)
                    .ok()
                    .and_then(Letter::from_byte)
                    .ok_or(WordError::InvalidCharacter {
                        character,
                        position,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("summer").unwrap();
        assert_eq!(word.text(), "summer");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_letters_in_order() {
        let word = Word::new("cab").unwrap();
        let indices: Vec<usize> = word.letters().iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_uppercase() {
        assert_eq!(
            Word::new("Romeo"),
            Err(WordError::InvalidCharacter {
                character: 'R',
                position: 0
            })
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("summer's").is_err()); // Apostrophe
        assert!(Word::new("heart-ache").is_err()); // Hyphen
        assert!(Word::new("sea ").is_err()); // Space
        assert!(Word::new("r0se").is_err()); // Number
        assert!(Word::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn word_error_reports_position() {
        let err = Word::new("wish'd").unwrap_err();
        assert_eq!(
            err,
            WordError::InvalidCharacter {
                character: '\'',
                position: 4
            }
        );
        assert!(err.to_string().contains("position 4"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("dream").unwrap();
        assert_eq!(format!("{word}"), "dream");
    }
}
