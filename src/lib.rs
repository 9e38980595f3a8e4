//! Shakespeare plays Scrabble
//!
//! Ranks the words of a corpus by their Scrabble board score, keeping only
//! dictionary words playable from a standard bag with at most two blanks.
//!
//! # Quick Start
//!
//! ```rust
//! use shakespeare_scrabble::core::Word;
//! use shakespeare_scrabble::scoring::Scorer;
//!
//! let scorer = Scorer::default();
//! let score = scorer.evaluate(&Word::new("quiver").unwrap()).unwrap();
//! println!("Placement score: {}", score.placement);
//! ```

// Core domain types
pub mod core;

// Blank feasibility and score calculation
pub mod scoring;

// Top-N aggregation
pub mod ranking;

// Corpus scan
pub mod pipeline;

// Run configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
