//! Rank command
//!
//! Runs the pipeline once and reports the top score groups.

use crate::config::ScoringConfig;
use crate::pipeline::{PipelineContext, PipelineStats, run_pipeline};
use crate::ranking::RankedResult;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a single ranking run
pub struct RankReport {
    pub result: RankedResult,
    pub stats: PipelineStats,
    pub duration: Duration,
}

/// Rank the context's corpus using the configured output size and execution
pub fn run_rank(context: &PipelineContext, config: &ScoringConfig) -> RankReport {
    let start = Instant::now();
    let (result, stats) = run_pipeline(context, config.top_n, config.execution);
    let duration = start.elapsed();

    info!(
        groups = result.len(),
        best = result.best_score(),
        elapsed_ms = duration.as_secs_f64() * 1000.0,
        "Ranking complete"
    );

    RankReport {
        result,
        stats,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Execution;
    use crate::wordlists::loader::{dictionary_from_slice, words_from_slice};
    use crate::wordlists::{CORPUS, DICTIONARY};

    fn bundled_context(config: &ScoringConfig) -> PipelineContext {
        PipelineContext::new(
            words_from_slice(CORPUS).words,
            dictionary_from_slice(DICTIONARY),
            config.scorer(),
        )
    }

    #[test]
    fn rank_bundled_corpus() {
        let config = ScoringConfig::default();
        let report = run_rank(&bundled_context(&config), &config);

        assert_eq!(report.result.len(), 3);
        assert_eq!(report.stats.corpus_words, CORPUS.len());
        assert!(report.stats.feasible <= report.stats.in_dictionary);
        assert!(report.stats.in_dictionary < report.stats.corpus_words);
        assert!(report.result.iter().all(|entry| !entry.words.is_empty()));
    }

    #[test]
    fn rank_respects_top_n() {
        let config = ScoringConfig {
            top_n: 1,
            ..ScoringConfig::default()
        };
        let report = run_rank(&bundled_context(&config), &config);
        assert_eq!(report.result.len(), 1);
    }

    #[test]
    fn rank_parallel_matches_sequential() {
        let sequential = ScoringConfig::default();
        let parallel = ScoringConfig {
            execution: Execution::Parallel,
            ..ScoringConfig::default()
        };
        let context = bundled_context(&sequential);

        assert_eq!(
            run_rank(&context, &sequential).result,
            run_rank(&context, &parallel).result
        );
    }
}
