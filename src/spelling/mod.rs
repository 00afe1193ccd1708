//! Noisy-channel spelling correction for Cassia.
//!
//! This module combines a smoothed bigram language model with a
//! confusion-matrix channel model to pick the most probable intended
//! phrase for a given input phrase.

pub mod candidates;
pub mod corrector;
pub mod edit;
pub mod error_model;
pub mod language_model;

// Re-export commonly used types
pub use candidates::*;
pub use corrector::*;
pub use edit::*;
pub use error_model::*;
pub use language_model::*;
