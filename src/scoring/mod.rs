//! Scrabble scoring
//!
//! Blank tile feasibility and the base, bonus and placement scores of a word.

mod blanks;
mod score;

pub use blanks::{BlankBudget, blanks_needed};
pub use score::{
    BINGO_LENGTH, SEVEN_LETTER_BONUS, Scorer, WordScore, base_score, double_letter_bonus,
    placement_score,
};
