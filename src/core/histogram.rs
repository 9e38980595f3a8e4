//! Letter histograms
//!
//! Counts how many times each letter occurs in a word.

use super::{Letter, Word};
use rustc_hash::FxHashMap;

/// Occurrence count of every distinct letter of one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: FxHashMap<Letter, u64>,
}

impl Histogram {
    /// Build the histogram of a word
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::core::{Histogram, Letter, Word};
    ///
    /// let histogram = Histogram::of(&Word::new("bubble").unwrap());
    /// assert_eq!(histogram.count(Letter::from_byte(b'b').unwrap()), 3);
    /// ```
    #[must_use]
    pub fn of(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter`, zero if absent
    #[inline]
    #[must_use]
    pub fn count(&self, letter: Letter) -> u64 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Iterate over `(letter, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u64)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }
}
