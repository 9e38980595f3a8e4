//! Core domain types for Scrabble scoring
//!
//! Letters, validated words, letter tables and histograms. Everything here is
//! pure data with validation at construction time.

mod histogram;
mod letter;
mod tables;
mod word;

pub use histogram::Histogram;
pub use letter::{ALPHABET_SIZE, Letter};
pub use tables::{
    LetterTables, MAX_TABLE_ENTRY, STANDARD_AVAILABLE, STANDARD_SCORES, TableError, TableKind,
    parse_table,
};
pub use word::{Word, WordError};
