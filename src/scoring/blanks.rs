//! Blank tile resolution
//!
//! A word may use more copies of a letter than the bag holds; each missing
//! copy has to be played with a blank tile.

use crate::core::{Histogram, LetterTables};
use std::fmt;

/// Number of blank tiles a player may use for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankBudget(u64);

impl BlankBudget {
    /// Two blanks, as in a standard Scrabble bag
    pub const STANDARD: Self = Self(2);

    #[must_use]
    pub const fn new(blanks: u64) -> Self {
        Self(blanks)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether a word needing `needed` blanks fits within this budget
    #[inline]
    #[must_use]
    pub const fn allows(self, needed: u64) -> bool {
        needed <= self.0
    }
}

impl Default for BlankBudget {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for BlankBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Blank tiles needed to cover every letter the bag runs short of
///
/// # Examples
/// ```
/// use shakespeare_scrabble::core::{Histogram, LetterTables, Word};
/// use shakespeare_scrabble::scoring::blanks_needed;
///
/// // The standard bag has a single 'z'
/// let histogram = Histogram::of(&Word::new("jazzy").unwrap());
/// assert_eq!(blanks_needed(&histogram, &LetterTables::standard()), 1);
/// ```
#[must_use]
pub fn blanks_needed(histogram: &Histogram, tables: &LetterTables) -> u64 {
    histogram
        .iter()
        .map(|(letter, count)| count.saturating_sub(u64::from(tables.available(letter))))
        .sum()
}
