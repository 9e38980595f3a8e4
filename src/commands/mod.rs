//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod score;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use rank::{RankReport, run_rank};
pub use score::{WordReport, score_word};
