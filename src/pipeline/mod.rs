//! Ranking pipeline
//!
//! Runs every corpus word through dictionary lookup, blank feasibility and
//! scoring, then groups the survivors by placement score.

mod dictionary;

pub use dictionary::Dictionary;

use crate::core::Word;
use crate::ranking::{RankedResult, ScoreBuckets};
use crate::scoring::{Scorer, WordScore};
use rayon::prelude::*;
use tracing::debug;

/// How corpus words are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// One word after another on the calling thread
    #[default]
    Sequential,
    /// Words scored on the rayon thread pool
    Parallel,
}

/// Counts of words surviving each stage of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub corpus_words: usize,
    pub in_dictionary: usize,
    pub feasible: usize,
}

/// Outcome of the per-word stage
#[derive(Debug, Clone, Copy)]
enum Candidate {
    NotInDictionary,
    Infeasible,
    Scored(WordScore),
}

/// Read-only inputs of a ranking run, loaded once before any scoring
#[derive(Debug)]
pub struct PipelineContext {
    corpus: Vec<Word>,
    dictionary: Dictionary,
    scorer: Scorer,
}

impl PipelineContext {
    /// Create a context from an already-loaded corpus and dictionary
    ///
    /// # Parameters
    /// - `corpus`: Words to rank, in text order
    /// - `dictionary`: Words that are legal to play
    /// - `scorer`: Letter tables and blank budget
    #[must_use]
    pub fn new(corpus: Vec<Word>, dictionary: Dictionary, scorer: Scorer) -> Self {
        Self {
            corpus,
            dictionary,
            scorer,
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    fn candidate(&self, word: &Word) -> Candidate {
        if !self.dictionary.contains(word.text()) {
            return Candidate::NotInDictionary;
        }
        self.scorer
            .evaluate(word)
            .map_or(Candidate::Infeasible, Candidate::Scored)
    }
}

/// Rank the corpus and keep the `top_n` best score groups
///
/// # Examples
/// ```
/// use shakespeare_scrabble::core::Word;
/// use shakespeare_scrabble::pipeline::{Dictionary, Execution, PipelineContext, rank_words};
/// use shakespeare_scrabble::scoring::Scorer;
///
/// let corpus: Vec<Word> = ["to", "be", "or", "not", "to", "be"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let dictionary: Dictionary = ["to", "be", "not"].into_iter().collect();
/// let context = PipelineContext::new(corpus, dictionary, Scorer::default());
///
/// let ranked = rank_words(&context, 3, Execution::Sequential);
/// assert_eq!(ranked.to_string(), "[14=[be, be], 8=[not], 6=[to, to]]");
/// ```
#[must_use]
pub fn rank_words(context: &PipelineContext, top_n: usize, execution: Execution) -> RankedResult {
    run_pipeline(context, top_n, execution).0
}

/// Rank the corpus, also reporting how many words survived each stage
///
/// Scoring may run in parallel, but words are always grouped in corpus
/// order, so both execution modes give identical results.
#[must_use]
pub fn run_pipeline(
    context: &PipelineContext,
    top_n: usize,
    execution: Execution,
) -> (RankedResult, PipelineStats) {
    let candidates: Vec<Candidate> = match execution {
        Execution::Sequential => context
            .corpus
            .iter()
            .map(|word| context.candidate(word))
            .collect(),
        Execution::Parallel => context
            .corpus
            .par_iter()
            .map(|word| context.candidate(word))
            .collect(),
    };

    let mut stats = PipelineStats {
        corpus_words: context.corpus.len(),
        ..PipelineStats::default()
    };
    let mut buckets = ScoreBuckets::new();

    for (word, candidate) in context.corpus.iter().zip(candidates) {
        match candidate {
            Candidate::NotInDictionary => {}
            Candidate::Infeasible => stats.in_dictionary += 1,
            Candidate::Scored(score) => {
                stats.in_dictionary += 1;
                stats.feasible += 1;
                buckets.insert(score.placement, word.text());
            }
        }
    }

    debug!(
        corpus_words = stats.corpus_words,
        in_dictionary = stats.in_dictionary,
        feasible = stats.feasible,
        distinct_scores = buckets.len(),
        ?execution,
        "Pipeline scan complete"
    );

    (buckets.into_ranked(top_n), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterTables;
    use crate::ranking::DEFAULT_TOP_N;
    use crate::scoring::BlankBudget;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    /// a, c, d, g, o, t worth one point each; ten of every tile
    fn cat_dog_scorer() -> Scorer {
        let mut scores = [0_i64; 26];
        for letter in [b'a', b'c', b'd', b'g', b'o', b't'] {
            scores[usize::from(letter - b'a')] = 1;
        }
        let tables = LetterTables::new(&scores, &[10; 26]).unwrap();
        Scorer::new(tables, BlankBudget::STANDARD)
    }

    #[test]
    fn anagrams_share_a_bucket() {
        let corpus = words(&["cat", "act", "dog"]);
        let dictionary: Dictionary = ["cat", "act", "dog"].into_iter().collect();
        let context = PipelineContext::new(corpus, dictionary, cat_dog_scorer());

        let ranked = rank_words(&context, DEFAULT_TOP_N, Execution::Sequential);

        assert!(!ranked.is_empty() && ranked.len() <= 2);
        assert!(ranked.iter().all(|entry| !entry.words.is_empty()));
        let cat_bucket = ranked
            .iter()
            .find(|entry| entry.words.contains(&"cat".to_string()))
            .unwrap();
        assert!(cat_bucket.words.contains(&"act".to_string()));
        assert!(ranked.iter().any(|entry| entry.words.contains(&"dog".to_string())));
        // 2 * 3 + 2 * 1 for every word
        assert_eq!(ranked.to_string(), "[8=[cat, act, dog]]");
    }

    #[test]
    fn context_debug_lists_inputs() {
        let dictionary: Dictionary = ["rose"].into_iter().collect();
        let context = PipelineContext::new(words(&["rose"]), dictionary, Scorer::default());

        let debug = format!("{context:?}");
        assert!(debug.starts_with("PipelineContext"));
        assert!(debug.contains("rose"));
        assert!(debug.contains("budget"));
    }

    #[test]
    fn words_outside_dictionary_are_skipped() {
        let corpus = words(&["rose", "smell", "sweet"]);
        let dictionary: Dictionary = ["rose"].into_iter().collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let (ranked, stats) = run_pipeline(&context, DEFAULT_TOP_N, Execution::Sequential);

        assert_eq!(ranked.word_count(), 1);
        assert_eq!(ranked.entries()[0].words, vec!["rose"]);
        assert_eq!(stats.corpus_words, 3);
        assert_eq!(stats.in_dictionary, 1);
    }

    #[test]
    fn infeasible_words_are_excluded_not_zeroed() {
        let corpus = words(&["pizzazz", "sleep"]);
        let dictionary: Dictionary = ["pizzazz", "sleep"].into_iter().collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let (ranked, stats) = run_pipeline(&context, DEFAULT_TOP_N, Execution::Sequential);

        assert_eq!(stats.in_dictionary, 2);
        assert_eq!(stats.feasible, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.entries()[0].words, vec!["sleep"]);
    }

    #[test]
    fn empty_corpus_gives_empty_result() {
        let dictionary: Dictionary = ["rose"].into_iter().collect();
        let context = PipelineContext::new(Vec::new(), dictionary, Scorer::default());
        assert!(rank_words(&context, DEFAULT_TOP_N, Execution::Sequential).is_empty());
    }

    #[test]
    fn empty_dictionary_gives_empty_result() {
        let context = PipelineContext::new(
            words(&["to", "sleep"]),
            Dictionary::default(),
            Scorer::default(),
        );
        let (ranked, stats) = run_pipeline(&context, DEFAULT_TOP_N, Execution::Parallel);
        assert!(ranked.is_empty());
        assert_eq!(stats.in_dictionary, 0);
    }

    #[test]
    fn at_most_top_n_groups() {
        let corpus = words(&["a", "be", "cow", "quiz", "jazzy", "rhythm"]);
        let dictionary: Dictionary = corpus.iter().map(Word::text).collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let ranked = rank_words(&context, DEFAULT_TOP_N, Execution::Sequential);
        assert_eq!(ranked.len(), DEFAULT_TOP_N);
        let scores: Vec<u32> = ranked.iter().map(|entry| entry.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn parallel_matches_sequential() {
        let corpus = words(&[
            "now", "is", "the", "winter", "of", "our", "discontent", "made", "glorious",
            "summer", "by", "this", "sun", "of", "york", "cat", "act", "tac", "zodiac",
            "quiver", "jewelled", "javelins", "sleep", "dream",
        ]);
        let dictionary: Dictionary = corpus.iter().map(Word::text).collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let sequential = run_pipeline(&context, 10, Execution::Sequential);
        let parallel = run_pipeline(&context, 10, Execution::Parallel);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let corpus = words(&["double", "toil", "and", "trouble", "fire", "burn", "bubble"]);
        let dictionary: Dictionary = corpus.iter().map(Word::text).collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let first = rank_words(&context, DEFAULT_TOP_N, Execution::Sequential);
        let second = rank_words(&context, DEFAULT_TOP_N, Execution::Sequential);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn seven_letter_bonus_lifts_word() {
        let corpus = words(&["trouble", "quiz"]);
        let dictionary: Dictionary = corpus.iter().map(Word::text).collect();
        let context = PipelineContext::new(corpus, dictionary, Scorer::default());

        let ranked = rank_words(&context, DEFAULT_TOP_N, Execution::Sequential);
        // trouble: base 9, bonus 3, bingo 50 -> 74; quiz: base 22, bonus 10 -> 64
        assert_eq!(ranked.to_string(), "[74=[trouble], 64=[quiz]]");
    }
}
