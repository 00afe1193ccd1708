//! Corpus data loading for Cassia.
//!
//! The statistics driving correction are precomputed and loaded once at
//! startup: n-gram counts, the vocabulary, and the confusion matrix. All
//! three structures are immutable after load and can be shared freely
//! across concurrent correction calls.

pub mod confusion;
pub mod ngram;
pub mod vocabulary;

// Re-export commonly used types
pub use confusion::*;
pub use ngram::*;
pub use vocabulary::*;
