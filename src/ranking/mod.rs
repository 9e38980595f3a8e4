//! Top-N aggregation of scored words
//!
//! Words are grouped into buckets keyed by score, kept in descending score
//! order. Within a bucket words stay in the order they were inserted.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

/// Number of score groups reported by default
pub const DEFAULT_TOP_N: usize = 3;

/// One group of the ranked output: a score and every word that reached it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    pub words: Vec<String>,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=[{}]", self.score, self.words.join(", "))
    }
}

/// Score groups in strictly descending score order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult {
    entries: Vec<ScoreEntry>,
}

impl RankedResult {
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score in the result, if any word was ranked
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.words.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

/// Words grouped by score, highest score first
///
/// # Examples
/// ```
/// use shakespeare_scrabble::ranking::ScoreBuckets;
///
/// let mut buckets = ScoreBuckets::new();
/// buckets.insert(12, "cat");
/// buckets.insert(40, "quiz");
/// buckets.insert(12, "act");
///
/// let ranked = buckets.into_ranked(3);
/// assert_eq!(ranked.to_string(), "[40=[quiz], 12=[cat, act]]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreBuckets {
    buckets: BTreeMap<Reverse<u32>, Vec<String>>,
}

impl ScoreBuckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to the bucket for `score`
    pub fn insert(&mut self, score: u32, word: impl Into<String>) {
        self.buckets
            .entry(Reverse(score))
            .or_default()
            .push(word.into());
    }

    /// Number of distinct scores seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Keep the `n` highest-scoring buckets
    #[must_use]
    pub fn into_ranked(self, n: usize) -> RankedResult {
        let entries = self
            .buckets
            .into_iter()
            .take(n)
            .map(|(Reverse(score), words)| ScoreEntry { score, words })
            .collect();
        RankedResult { entries }
    }
}

impl<W: Into<String>> FromIterator<(u32, W)> for ScoreBuckets {
    fn from_iter<I: IntoIterator<Item = (u32, W)>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for (score, word) in iter {
            buckets.insert(score, word);
        }
        buckets
    }
}
