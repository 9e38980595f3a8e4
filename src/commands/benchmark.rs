//! Benchmark command
//!
//! Times repeated ranking runs over the same inputs, with warmup iterations
//! discarded, and checks that every run produced the same result.

use crate::config::ScoringConfig;
use crate::pipeline::{PipelineContext, rank_words};
use crate::ranking::RankedResult;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Number of warmup and measured iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub warmup: usize,
    pub iterations: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup: 5,
            iterations: 5,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub warmup: usize,
    pub iterations: usize,
    pub corpus_words: usize,
    pub samples: Vec<Duration>,
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub words_per_second: f64,
    /// True if every iteration returned an identical ranking
    pub stable: bool,
    pub result: RankedResult,
}

/// Run the benchmark on a loaded context
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    context: &PipelineContext,
    config: &ScoringConfig,
    bench: BenchmarkConfig,
) -> BenchmarkResult {
    let total_runs = bench.warmup + bench.iterations;

    let pb = ProgressBar::new(total_runs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut reference: Option<RankedResult> = None;
    let mut stable = true;
    let mut samples = Vec::with_capacity(bench.iterations);

    for run in 0..total_runs {
        let measuring = run >= bench.warmup;
        pb.set_message(if measuring { "measuring" } else { "warmup" });

        let start = Instant::now();
        let result = rank_words(context, config.top_n, config.execution);
        let elapsed = start.elapsed();

        if let Some(expected) = &reference {
            if *expected != result {
                warn!(run, "Ranking differs from the first run");
                stable = false;
            }
        } else {
            reference = Some(result);
        }

        if measuring {
            debug!(run, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "Iteration");
            samples.push(elapsed);
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total: Duration = samples.iter().sum();
    let mean = if samples.is_empty() {
        Duration::ZERO
    } else {
        total / samples.len() as u32
    };
    let corpus_words = context.corpus().len();
    let words_per_second = if total.is_zero() {
        0.0
    } else {
        (corpus_words * samples.len()) as f64 / total.as_secs_f64()
    };

    BenchmarkResult {
        warmup: bench.warmup,
        iterations: bench.iterations,
        corpus_words,
        min: samples.iter().min().copied().unwrap_or_default(),
        max: samples.iter().max().copied().unwrap_or_default(),
        samples,
        total,
        mean,
        words_per_second,
        stable,
        result: reference.unwrap_or_default(),
    }
}
