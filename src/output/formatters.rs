//! Formatting utilities for terminal output

use crate::ranking::ScoreEntry;

/// Format a score group as `score: word, word, ...`
#[must_use]
pub fn format_entry(entry: &ScoreEntry) -> String {
    format!("{:>4}: {}", entry.score, entry.words.join(", "))
}

/// Format letter counts as `a×2 b c×3`
#[must_use]
pub fn format_histogram(counts: &[(char, u64)]) -> String {
    counts
        .iter()
        .map(|&(letter, count)| {
            if count == 1 {
                letter.to_string()
            } else {
                format!("{letter}×{count}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a score relative to the best score
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}
