//! Word scoring command
//!
//! Breaks down how a single word is scored.

use crate::core::{Histogram, Word};
use crate::pipeline::PipelineContext;
use crate::scoring::{base_score, blanks_needed, double_letter_bonus, placement_score};

/// Score breakdown of one word
pub struct WordReport {
    pub word: String,
    pub in_dictionary: bool,
    /// Letter counts, alphabetical
    pub histogram: Vec<(char, u64)>,
    pub blanks: u64,
    pub feasible: bool,
    pub base: u32,
    pub bonus: u32,
    pub placement: u32,
}

impl WordReport {
    /// Whether the word would take part in the ranking
    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        self.in_dictionary && self.feasible
    }
}

/// Explain the score of a word under the context's tables and dictionary
///
/// # Errors
///
/// Returns an error if the word is not a plain lowercase `a`-`z` word after
/// lowercasing.
pub fn score_word(word: &str, context: &PipelineContext) -> Result<WordReport, String> {
    let word_obj =
        Word::new(word.trim().to_lowercase()).map_err(|e| format!("Invalid word: {e}"))?;

    let scorer = context.scorer();
    let tables = scorer.tables();
    let histogram = Histogram::of(&word_obj);

    let mut counts: Vec<(char, u64)> = histogram
        .iter()
        .map(|(letter, count)| (letter.as_char(), count))
        .collect();
    counts.sort_unstable();

    let blanks = blanks_needed(&histogram, tables);
    let base = base_score(&histogram, tables);
    let bonus = double_letter_bonus(&word_obj, tables);

    Ok(WordReport {
        word: word_obj.text().to_string(),
        in_dictionary: context.dictionary().contains(word_obj.text()),
        histogram: counts,
        blanks,
        feasible: scorer.budget().allows(blanks),
        base,
        bonus,
        placement: placement_score(base, bonus, word_obj.len()),
    })
}
