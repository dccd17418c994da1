//! Wortle
//!
//! A single-player German Wordle backed by a small persisted word store.
//!
//! # Quick Start
//!
//! ```rust
//! use wortle::core::{Verdict, Word, evaluate};
//!
//! let secret = Word::new("KATZE").unwrap();
//! let guess = Word::new("KATER").unwrap();
//!
//! let result = evaluate(&secret, &guess);
//! assert_eq!(result.verdict_at(0), Verdict::Correct);
//! ```

// Core game engine
pub mod core;

// Persisted word store
pub mod store;

// Store-backed game sessions
pub mod session;

// Word list ingestion
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
