//! Display functions for command results

use super::formatters::{format_entry, format_histogram, score_bar};
use crate::commands::{BenchmarkResult, RankReport, WordReport};
use crate::ranking::RankedResult;
use colored::Colorize;

fn print_ranking(result: &RankedResult) {
    if result.is_empty() {
        println!("   {}", "No playable words found".yellow());
        return;
    }

    let best = result.best_score().unwrap_or(0);
    for (i, entry) in result.iter().enumerate() {
        let line = format_entry(entry);
        let line = if i == 0 {
            line.bright_yellow().bold()
        } else {
            line.normal()
        };
        println!("   {} {line}", score_bar(entry.score, best, 20).green());
    }
}

/// Print the result of a ranking run
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SHAKESPEARE PLAYS SCRABBLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", "Corpus:".bright_cyan().bold());
    println!("   Words scanned:    {}", report.stats.corpus_words);
    println!("   In dictionary:    {}", report.stats.in_dictionary);
    println!("   Playable:         {}", report.stats.feasible);
    println!("   Ranked:           {}", report.result.word_count());
    println!(
        "   Time taken:       {:.2}ms",
        report.duration.as_secs_f64() * 1000.0
    );

    println!("\n🏆 {}", "Best scores:".bright_cyan().bold());
    print_ranking(&report.result);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Iterations:       {} (+{} warmup)",
        result.iterations, result.warmup
    );
    println!("   Corpus words:     {}", result.corpus_words);
    println!(
        "   Mean:             {}",
        format!("{:.3}ms", result.mean.as_secs_f64() * 1000.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{:.3}ms", result.min.as_secs_f64() * 1000.0).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{:.3}ms", result.max.as_secs_f64() * 1000.0).yellow()
    );
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.stable {
        println!("   Results:          {}", "identical across runs".green());
    } else {
        println!("   Results:          {}", "DIFFER between runs".red().bold());
    }

    println!("\n🏆 {}", "Best scores:".bright_cyan().bold());
    print_ranking(&result.result);
}

/// Print the score breakdown of a word
pub fn print_word_report(report: &WordReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Scoring: {}", report.word.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Letters:     {}", format_histogram(&report.histogram));
    println!("   Blanks:      {}", report.blanks);
    println!("   Base score:  {}", report.base);
    println!("   Bonus:       {} (double letter)", report.bonus);
    println!(
        "   Placement:   {}",
        report.placement.to_string().bright_yellow().bold()
    );

    println!();
    if report.is_ranked() {
        println!("{}", "✅ Ranked".green().bold());
    } else if !report.in_dictionary {
        println!("{}", "❌ Not in the dictionary".red().bold());
    } else {
        println!("{}", "❌ Needs too many blanks".red().bold());
    }
}
