//! Smoothed n-gram language model.

use serde::{Deserialize, Serialize};

use crate::corpus::ngram::NGramCounts;
use crate::error::{CassiaError, Result};

/// Configuration for the language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageModelConfig {
    /// Additive ("add-k") smoothing constant. The default of 0.005 is the
    /// value the reference corpus was tuned with.
    pub smoothing_k: f64,
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        LanguageModelConfig { smoothing_k: 0.005 }
    }
}

/// Conditional word probabilities estimated from n-gram counts.
///
/// All probabilities are add-k smoothed, so they are strictly positive even
/// for unseen n-grams and log-domain scoring never hits negative infinity.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    ngrams: NGramCounts,
    vocabulary_size: usize,
    config: LanguageModelConfig,
}

impl LanguageModel {
    /// Create a language model with the default smoothing constant.
    pub fn new(ngrams: NGramCounts, vocabulary_size: usize) -> Self {
        LanguageModel {
            ngrams,
            vocabulary_size,
            config: LanguageModelConfig::default(),
        }
    }

    /// Create a language model with custom configuration.
    pub fn with_config(
        ngrams: NGramCounts,
        vocabulary_size: usize,
        config: LanguageModelConfig,
    ) -> Self {
        LanguageModel {
            ngrams,
            vocabulary_size,
            config,
        }
    }

    /// Number of distinct n-gram entries backing the model.
    pub fn ngram_entries(&self) -> usize {
        self.ngrams.len()
    }

    /// Size of the vocabulary the smoothing normalizes over.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Smoothed unconditional probability of a word.
    pub fn unigram_probability(&self, word: &str) -> Result<f64> {
        validate_word(word)?;

        let count = self.ngrams.count(word) as f64;
        let k = self.config.smoothing_k;
        let v = self.vocabulary_size as f64;

        Ok((count + k) / (count + k * v))
    }

    /// Smoothed probability of a word given the word before it.
    pub fn probability_given_prev(&self, word: &str, prev_word: &str) -> Result<f64> {
        validate_word(word)?;
        validate_word(prev_word)?;

        let bigram_count = self.ngrams.bigram_count(prev_word, word) as f64;
        let prev_count = self.ngrams.count(prev_word) as f64;
        let k = self.config.smoothing_k;
        let v = self.vocabulary_size as f64;

        Ok((bigram_count + k) / (prev_count + k * v))
    }

    /// Smoothed probability of a word given the word after it.
    pub fn probability_given_next(&self, word: &str, next_word: &str) -> Result<f64> {
        validate_word(word)?;
        validate_word(next_word)?;

        let bigram_count = self.ngrams.bigram_count(word, next_word) as f64;
        let next_count = self.ngrams.count(next_word) as f64;
        let k = self.config.smoothing_k;
        let v = self.vocabulary_size as f64;

        Ok((bigram_count + k) / (next_count + k * v))
    }
}

fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(CassiaError::invalid_argument("word must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> LanguageModel {
        let mut ngrams = NGramCounts::new();
        ngrams.add_count("the", 100);
        ngrams.add_count("cat", 20);
        ngrams.add_count("sat", 10);
        ngrams.add_count("the cat", 15);
        ngrams.add_count("cat sat", 8);
        LanguageModel::new(ngrams, 50)
    }

    #[test]
    fn test_unigram_probability() {
        let model = test_model();

        let p_the = model.unigram_probability("the").unwrap();
        let p_cat = model.unigram_probability("cat").unwrap();
        let p_unseen = model.unigram_probability("dog").unwrap();

        assert!(p_the > p_cat);
        assert!(p_cat > p_unseen);
        assert!(p_unseen > 0.0);

        // (100 + 0.005) / (100 + 0.005 * 50)
        let expected = 100.005 / 100.25;
        assert!((p_the - expected).abs() < 1e-9);
    }

    #[test]
    fn test_probability_given_prev() {
        let model = test_model();

        let p_seen = model.probability_given_prev("cat", "the").unwrap();
        let p_unseen = model.probability_given_prev("sat", "the").unwrap();

        assert!(p_seen > p_unseen);
        assert!(p_unseen > 0.0);

        // (15 + 0.005) / (100 + 0.005 * 50)
        let expected = 15.005 / 100.25;
        assert!((p_seen - expected).abs() < 1e-9);
    }

    #[test]
    fn test_probability_given_next() {
        let model = test_model();

        let p_seen = model.probability_given_next("cat", "sat").unwrap();
        let p_unseen = model.probability_given_next("the", "sat").unwrap();

        assert!(p_seen > p_unseen);

        // (8 + 0.005) / (10 + 0.005 * 50)
        let expected = 8.005 / 10.25;
        assert!((p_seen - expected).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_stay_in_unit_interval() {
        let model = test_model();
        let words = ["the", "cat", "sat", "dog", "measure"];

        for w in &words {
            let p = model.unigram_probability(w).unwrap();
            assert!(p > 0.0 && p <= 1.0, "unigram p({w}) = {p}");

            for prev in &words {
                let p = model.probability_given_prev(w, prev).unwrap();
                assert!(p > 0.0, "p({w} | prev {prev}) = {p}");
            }
        }
    }

    #[test]
    fn test_empty_word_is_invalid() {
        let model = test_model();

        assert!(model.unigram_probability("").is_err());
        assert!(model.probability_given_prev("cat", "").is_err());
        assert!(model.probability_given_next("", "cat").is_err());
    }

    #[test]
    fn test_custom_smoothing_constant() {
        let mut ngrams = NGramCounts::new();
        ngrams.add_count("the", 10);
        let config = LanguageModelConfig { smoothing_k: 1.0 };
        let model = LanguageModel::with_config(ngrams, 10, config);

        // (10 + 1) / (10 + 1 * 10)
        let p = model.unigram_probability("the").unwrap();
        assert!((p - 11.0 / 20.0).abs() < 1e-9);
    }
}
