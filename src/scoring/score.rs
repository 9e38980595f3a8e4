//! Word and board placement scores

use super::blanks::{BlankBudget, blanks_needed};
use crate::core::{Histogram, Letter, LetterTables, Word};

/// Bonus for playing a word of [`BINGO_LENGTH`] letters
pub const SEVEN_LETTER_BONUS: u32 = 50;

/// Word length that earns [`SEVEN_LETTER_BONUS`]
pub const BINGO_LENGTH: usize = 7;

/// Size of the leading window searched for the double-letter square
const WINDOW: usize = 3;

/// Letter score of a word, counting blank-covered letters as zero
///
/// Each letter contributes its value once per tile actually in the bag; the
/// excess is played with blanks, which are worth nothing.
///
/// # Examples
/// ```
/// use shakespeare_scrabble::core::{Histogram, LetterTables, Word};
/// use shakespeare_scrabble::scoring::base_score;
///
/// let tables = LetterTables::standard();
/// // d=2, r=1, e=1, a=1, m=3
/// assert_eq!(base_score(&Histogram::of(&Word::new("dream").unwrap()), &tables), 8);
/// // Only one 'z' in the bag: the second is a blank
/// assert_eq!(base_score(&Histogram::of(&Word::new("zzz").unwrap()), &tables), 10);
/// ```
#[must_use]
pub fn base_score(histogram: &Histogram, tables: &LetterTables) -> u32 {
    histogram
        .iter()
        .map(|(letter, count)| {
            let available = tables.available(letter);
            // Bounded by `available`, so it fits in a u32
            let covered = count.min(u64::from(available)) as u32;
            tables.score(letter) * covered
        })
        .sum()
}

/// Best letter score a double-letter square can land under
///
/// Searches the first three letters together with the letters from the
/// fourth position onwards. Both windows are cut from the full word and are
/// never deduplicated. An empty window contributes nothing.
#[must_use]
pub fn double_letter_bonus(word: &Word, tables: &LetterTables) -> u32 {
    let (leading, trailing) = windows(word.letters());
    leading
        .iter()
        .chain(trailing)
        .map(|&letter| tables.score(letter))
        .max()
        .unwrap_or(0)
}

fn windows(letters: &[Letter]) -> (&[Letter], &[Letter]) {
    let cut = letters.len().min(WINDOW);
    (&letters[..cut], &letters[cut..])
}

/// Score of the word placed on the board
///
/// `2 * base + 2 * bonus`, plus [`SEVEN_LETTER_BONUS`] for seven-letter words.
#[inline]
#[must_use]
pub const fn placement_score(base: u32, bonus: u32, len: usize) -> u32 {
    let bingo = if len == BINGO_LENGTH {
        SEVEN_LETTER_BONUS
    } else {
        0
    };
    2 * base + 2 * bonus + bingo
}

/// Every score computed for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    /// Letter score with blanks counted as zero
    pub base: u32,
    /// Double-letter bonus letter value
    pub bonus: u32,
    /// Final score on the board
    pub placement: u32,
}

/// Scores words against a fixed set of letter tables and blank budget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorer {
    tables: LetterTables,
    budget: BlankBudget,
}

impl Scorer {
    #[must_use]
    pub const fn new(tables: LetterTables, budget: BlankBudget) -> Self {
        Self { tables, budget }
    }

    #[must_use]
    pub const fn tables(&self) -> &LetterTables {
        &self.tables
    }

    #[must_use]
    pub const fn budget(&self) -> BlankBudget {
        self.budget
    }

    /// Score a word, or `None` if it needs more blanks than the budget allows
    ///
    /// The histogram is built once and shared by the blank check and the
    /// base score.
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::core::Word;
    /// use shakespeare_scrabble::scoring::Scorer;
    ///
    /// let scorer = Scorer::default();
    /// let score = scorer.evaluate(&Word::new("quixotic").unwrap()).unwrap();
    /// assert_eq!(score.base, 26);
    ///
    /// // Four 'z' against a single tile needs three blanks
    /// assert!(scorer.evaluate(&Word::new("zzzz").unwrap()).is_none());
    /// ```
    #[must_use]
    pub fn evaluate(&self, word: &Word) -> Option<WordScore> {
        let histogram = Histogram::of(word);
        let blanks = blanks_needed(&histogram, &self.tables);
        if !self.budget.allows(blanks) {
            return None;
        }

        let base = base_score(&histogram, &self.tables);
        let bonus = double_letter_bonus(word, &self.tables);
        Some(WordScore {
            base,
            bonus,
            placement: placement_score(base, bonus, word.len()),
        })
    }
}
