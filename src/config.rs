//! Run configuration
//!
//! Collects the letter tables, blank budget and output size for a run. Table
//! problems are configuration errors and are reported before any scoring.

use crate::core::{LetterTables, TableError, TableKind, parse_table};
use crate::pipeline::Execution;
use crate::ranking::DEFAULT_TOP_N;
use crate::scoring::{BlankBudget, Scorer};

/// Everything that shapes a ranking run besides the word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub tables: LetterTables,
    pub budget: BlankBudget,
    pub top_n: usize,
    pub execution: Execution,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tables: LetterTables::standard(),
            budget: BlankBudget::STANDARD,
            top_n: DEFAULT_TOP_N,
            execution: Execution::Sequential,
        }
    }
}

impl ScoringConfig {
    /// Build a configuration from command-line style options
    ///
    /// Tables are comma-separated lists of 26 integers; `None` keeps the
    /// standard table.
    ///
    /// # Errors
    /// Returns `TableError` if a table does not parse or fails validation.
    ///
    /// # Examples
    /// ```
    /// use shakespeare_scrabble::config::ScoringConfig;
    ///
    /// let config = ScoringConfig::from_options(None, None, 2, 3, false).unwrap();
    /// assert_eq!(config, ScoringConfig::default());
    ///
    /// assert!(ScoringConfig::from_options(Some("1,2,3"), None, 2, 3, false).is_err());
    /// ```
    pub fn from_options(
        letter_scores: Option<&str>,
        available_letters: Option<&str>,
        blanks: u64,
        top_n: usize,
        parallel: bool,
    ) -> Result<Self, TableError> {
        let tables = if letter_scores.is_none() && available_letters.is_none() {
            LetterTables::standard()
        } else {
            let scores = table_entries(TableKind::Scores, letter_scores)?;
            let available = table_entries(TableKind::Available, available_letters)?;
            LetterTables::new(&scores, &available)?
        };

        Ok(Self {
            tables,
            budget: BlankBudget::new(blanks),
            top_n,
            execution: if parallel {
                Execution::Parallel
            } else {
                Execution::Sequential
            },
        })
    }

    /// Scorer for these tables and blank budget
    #[must_use]
    pub fn scorer(&self) -> Scorer {
        Scorer::new(self.tables.clone(), self.budget)
    }
}

fn table_entries(table: TableKind, input: Option<&str>) -> Result<Vec<i64>, TableError> {
    match input {
        Some(input) => parse_table(table, input),
        None => {
            let standard = match table {
                TableKind::Scores => crate::core::STANDARD_SCORES,
                TableKind::Available => crate::core::STANDARD_AVAILABLE,
            };
            Ok(standard.iter().map(|&value| i64::from(value)).collect())
        }
    }
}
