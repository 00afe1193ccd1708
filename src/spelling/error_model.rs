//! Channel model over the confusion matrix.

use crate::corpus::confusion::ConfusionCounts;
use crate::error::{CassiaError, Result};
use crate::spelling::edit::edit_between;

/// Estimates how likely a specific character-level edit is, based on the
/// observed confusion counts.
#[derive(Debug, Clone)]
pub struct ErrorModel {
    confusion: ConfusionCounts,
}

impl ErrorModel {
    /// Create an error model over the given confusion counts.
    pub fn new(confusion: ConfusionCounts) -> Self {
        ErrorModel { confusion }
    }

    /// Number of distinct edit patterns in the confusion matrix.
    pub fn pattern_count(&self) -> usize {
        self.confusion.len()
    }

    /// Total number of observed confusion events.
    pub fn event_total(&self) -> u64 {
        self.confusion.total()
    }

    /// Probability that `original_word` was typed when `corrected_word` was
    /// intended.
    ///
    /// The edit pattern between the two words is looked up in the confusion
    /// matrix; unseen patterns are floored at count 1 so the probability is
    /// never zero. The "no error" case of identical words is the phrase
    /// scorer's concern, not this model's.
    pub fn probability_correction(&self, original_word: &str, corrected_word: &str) -> Result<f64> {
        if original_word.is_empty() || corrected_word.is_empty() {
            return Err(CassiaError::invalid_argument("word must be non-empty"));
        }

        let pattern = edit_between(original_word, corrected_word);
        let count = self.confusion.count(&pattern.key()).max(1);
        let total = self.confusion.total().max(1);

        Ok(count as f64 / total as f64)
    }
}
