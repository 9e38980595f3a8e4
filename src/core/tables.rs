//! Letter tables
//!
//! Per-letter point values and tile counts, indexed by [`Letter`]. Both tables
//! are validated once at startup and never change afterwards.

use super::{ALPHABET_SIZE, Letter};
use std::fmt;

/// Point value of each letter, `a` to `z`
pub const STANDARD_SCORES: [u32; ALPHABET_SIZE] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Number of tiles of each letter in the bag, `a` to `z`
pub const STANDARD_AVAILABLE: [u32; ALPHABET_SIZE] = [
    9, 2, 2, 1, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Largest entry accepted in either table
///
/// Keeps the highest possible placement score,
/// `2 * 26 * MAX_TABLE_ENTRY^2 + 2 * MAX_TABLE_ENTRY + 50`, within a `u32`.
pub const MAX_TABLE_ENTRY: u32 = 1000;

/// Which of the two tables a [`TableError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Scores,
    Available,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scores => write!(f, "letter score table"),
            Self::Available => write!(f, "available letter table"),
        }
    }
}

/// Error type for malformed letter tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    WrongLength {
        table: TableKind,
        len: usize,
    },
    Negative {
        table: TableKind,
        letter: char,
        value: i64,
    },
    TooLarge {
        table: TableKind,
        letter: char,
        value: i64,
    },
    Unparsable {
        table: TableKind,
        entry: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { table, len } => {
                write!(f, "The {table} must have {ALPHABET_SIZE} entries, got {len}")
            }
            Self::Negative {
                table,
                letter,
                value,
            } => write!(f, "The {table} has a negative entry for '{letter}': {value}"),
            Self::TooLarge {
                table,
                letter,
                value,
            } => write!(
                f,
                "The {table} entry for '{letter}' is too large: {value} (max {MAX_TABLE_ENTRY})"
            ),
            Self::Unparsable { table, entry } => {
                write!(f, "The {table} has an entry that is not an integer: {entry:?}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Point values and tile availability for every letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTables {
    scores: [u32; ALPHABET_SIZE],
    available: [u32; ALPHABET_SIZE],
}

impl LetterTables {
    /// Build tables from raw integer entries
    ///
    /// # Errors
    /// Returns `TableError` if either table does not have exactly 26 entries,
    /// or has an entry that is negative or above [`MAX_TABLE_ENTRY`].
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::core::LetterTables;
    ///
    /// let tables = LetterTables::new(&[1; 26], &[2; 26]).unwrap();
    /// assert!(LetterTables::new(&[1; 25], &[2; 26]).is_err());
    /// assert!(LetterTables::new(&[1; 26], &[-1; 26]).is_err());
    /// # let _ = tables;
    /// ```
    pub fn new(scores: &[i64], available: &[i64]) -> Result<Self, TableError> {
        Ok(Self {
            scores: validate(TableKind::Scores, scores)?,
            available: validate(TableKind::Available, available)?,
        })
    }

    /// The tables used by the Shakespeare benchmark
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            scores: STANDARD_SCORES,
            available: STANDARD_AVAILABLE,
        }
    }

    /// Point value of a letter
    #[inline]
    #[must_use]
    pub const fn score(&self, letter: Letter) -> u32 {
        self.scores[letter.index()]
    }

    /// Number of tiles available for a letter
    #[inline]
    #[must_use]
    pub const fn available(&self, letter: Letter) -> u32 {
        self.available[letter.index()]
    }
}

impl Default for LetterTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate(table: TableKind, entries: &[i64]) -> Result<[u32; ALPHABET_SIZE], TableError> {
    if entries.len() != ALPHABET_SIZE {
        return Err(TableError::WrongLength {
            table,
            len: entries.len(),
        });
    }

    let mut values = [0; ALPHABET_SIZE];
    for ((slot, &value), letter) in values.iter_mut().zip(entries).zip(Letter::all()) {
        if value < 0 {
            return Err(TableError::Negative {
                table,
                letter: letter.as_char(),
                value,
            });
        }
        *slot = u32::try_from(value)
            .ok()
            .filter(|&entry| entry <= MAX_TABLE_ENTRY)
            .ok_or(TableError::TooLarge {
                table,
                letter: letter.as_char(),
                value,
            })?;
    }

    Ok(values)
}

/// Parse a comma-separated list of integers into raw table entries
///
/// Whitespace around entries is ignored. Length and sign are checked later by
/// [`LetterTables::new`].
///
/// # Errors
/// Returns `TableError::Unparsable` for the first entry that is not an integer.
pub fn parse_table(table: TableKind, input: &str) -> Result<Vec<i64>, TableError> {
    input
        .split(',')
        .map(str::trim)
        .map(|entry| {
            entry.parse::<i64>().map_err(|_| TableError::Unparsable {
                table,
                entry: entry.to_string(),
            })
        })
        .collect()
}
