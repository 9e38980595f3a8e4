//! Letter identifiers
//!
//! A letter is stored as its offset from `'a'`, which is also its index into
//! the per-letter tables.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A lowercase ASCII letter identified by its offset from `'a'` (0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Convert a byte into a letter
    ///
    /// Returns `None` for anything outside `b'a'..=b'z'`.
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::core::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'c').map(Letter::index), Some(2));
    /// assert!(Letter::from_byte(b'C').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte - b'a'))
        } else {
            None
        }
    }

    /// Table index of this letter (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter as a lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate over every letter from `a` to `z`
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
