//! # Cassia
//!
//! A noisy-channel spelling corrector for short phrases.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Smoothed bigram language model over precomputed n-gram counts
//! - Confusion-matrix channel model for character-level edits
//! - Bounded candidate-phrase search (at most two non-adjacent corrections)

pub mod cli;
pub mod corpus;
pub mod error;
pub mod spelling;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
