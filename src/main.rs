//! Shakespeare plays Scrabble - CLI
//!
//! Ranks corpus words by Scrabble board score and benchmarks the ranking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shakespeare_scrabble::{
    commands::{BenchmarkConfig, run_benchmark, run_rank, score_word},
    config::ScoringConfig,
    output::{print_benchmark_result, print_rank_report, print_word_report},
    pipeline::{Dictionary, PipelineContext},
    ranking::DEFAULT_TOP_N,
    scoring::BlankBudget,
    wordlists::{
        CORPUS, DICTIONARY,
        loader::{
            LoadedWords, dictionary_from_slice, load_dictionary, load_from_file, words_from_slice,
        },
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shakespeare_scrabble",
    about = "Ranks Shakespeare's words by their Scrabble board score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file, one word per line (default: bundled corpus)
    #[arg(short, long, global = true)]
    corpus: Option<String>,

    /// Dictionary file, one word per line (default: bundled dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Letter scores a..z as 26 comma-separated integers
    #[arg(long, global = true)]
    letter_scores: Option<String>,

    /// Available tiles a..z as 26 comma-separated integers
    #[arg(long, global = true)]
    available_letters: Option<String>,

    /// Blank tiles allowed per word
    #[arg(short, long, global = true, default_value_t = BlankBudget::STANDARD.value())]
    blanks: u64,

    /// Number of score groups to report
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Score words on all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus (default)
    Rank,

    /// Time repeated ranking runs
    Benchmark {
        /// Warmup iterations, not measured
        #[arg(short, long, default_value_t = BenchmarkConfig::default().warmup)]
        warmup: usize,

        /// Measured iterations
        #[arg(short = 'n', long, default_value_t = BenchmarkConfig::default().iterations)]
        iterations: usize,
    },

    /// Show how a single word is scored
    Score {
        /// Word to score
        word: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load corpus and dictionary based on the -c and -d flags
fn load_word_lists(
    corpus: Option<&str>,
    dictionary: Option<&str>,
) -> Result<(LoadedWords, Dictionary)> {
    let corpus = match corpus {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to read corpus {path}"))?
        }
        None => words_from_slice(CORPUS),
    };

    let dictionary = match dictionary {
        Some(path) => {
            load_dictionary(path).with_context(|| format!("Failed to read dictionary {path}"))?
        }
        None => dictionary_from_slice(DICTIONARY),
    };

    Ok((corpus, dictionary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Tables are validated before anything is loaded or scored
    let config = ScoringConfig::from_options(
        cli.letter_scores.as_deref(),
        cli.available_letters.as_deref(),
        cli.blanks,
        cli.top,
        cli.parallel,
    )
    .context("Invalid letter tables")?;

    let (corpus, dictionary) = load_word_lists(cli.corpus.as_deref(), cli.dictionary.as_deref())?;
    info!(
        corpus_words = corpus.words.len(),
        rejected = corpus.rejected,
        dictionary_words = dictionary.len(),
        "Word lists loaded"
    );

    let context = PipelineContext::new(corpus.words, dictionary, config.scorer());

    // Default to Rank if no command given
    let command = cli.command.unwrap_or(Commands::Rank);

    match command {
        Commands::Rank => {
            let report = run_rank(&context, &config);
            print_rank_report(&report);
            Ok(())
        }
        Commands::Benchmark { warmup, iterations } => {
            println!("Running benchmark: {warmup} warmup + {iterations} measured iterations...");
            let result = run_benchmark(&context, &config, BenchmarkConfig { warmup, iterations });
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Score { word } => {
            let report = score_word(&word, &context).map_err(|e| anyhow::anyhow!(e))?;
            print_word_report(&report);
            Ok(())
        }
    }
}
