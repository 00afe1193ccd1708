//! Noisy-channel phrase correction search.

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::vocabulary::Vocabulary;
use crate::error::{CassiaError, Result};
use crate::spelling::candidates::CandidateGenerator;
use crate::spelling::error_model::ErrorModel;
use crate::spelling::language_model::LanguageModel;

/// Configuration for the phrase corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum number of corrected words per phrase.
    pub max_corrections: usize,
    /// Probability that a word typed as itself was intended.
    pub no_error_probability: f64,
    /// Exponent on the channel probability, tuning its influence relative
    /// to the language model.
    pub channel_weight: f64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_corrections: 2,
            no_error_probability: 0.9,
            channel_weight: 1.0,
        }
    }
}

/// Statistics about the data backing a corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of words in the vocabulary.
    pub vocabulary_words: usize,
    /// Number of distinct n-gram entries.
    pub ngram_entries: usize,
    /// Number of distinct confusion patterns.
    pub confusion_patterns: usize,
    /// Total observed confusion events.
    pub confusion_events: u64,
}

/// Corrects spelling errors in short phrases.
///
/// For each input phrase the corrector enumerates every candidate phrase
/// with at most `max_corrections` corrected words, no two of them adjacent,
/// and returns the candidate with the highest combined language-model and
/// channel-model score. The loaded statistics are immutable, so a corrector
/// can be shared across concurrent correction calls.
pub struct PhraseCorrector {
    candidates: CandidateGenerator,
    language_model: LanguageModel,
    error_model: ErrorModel,
    config: CorrectorConfig,
}

impl PhraseCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(
        vocabulary: Vocabulary,
        language_model: LanguageModel,
        error_model: ErrorModel,
    ) -> Self {
        Self::with_config(
            vocabulary,
            language_model,
            error_model,
            CorrectorConfig::default(),
        )
    }

    /// Create a corrector with custom configuration.
    pub fn with_config(
        vocabulary: Vocabulary,
        language_model: LanguageModel,
        error_model: ErrorModel,
        config: CorrectorConfig,
    ) -> Self {
        PhraseCorrector {
            candidates: CandidateGenerator::new(vocabulary),
            language_model,
            error_model,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// The language model backing this corrector.
    pub fn language_model(&self) -> &LanguageModel {
        &self.language_model
    }

    /// Candidate words for a single word, identity candidate first.
    pub fn similar_words(&self, word: &str) -> Vec<String> {
        self.candidates.similar_words(word)
    }

    /// Statistics about the loaded data.
    pub fn stats(&self) -> CorrectorStats {
        CorrectorStats {
            vocabulary_words: self.candidates.vocabulary_size(),
            ngram_entries: self.language_model.ngram_entries(),
            confusion_patterns: self.error_model.pattern_count(),
            confusion_events: self.error_model.event_total(),
        }
    }

    /// Correct a phrase, returning the most probable intended phrase.
    ///
    /// At most `max_corrections` words are replaced and no two replacements
    /// are adjacent; every replacement is a vocabulary word within edit
    /// distance 1 of the typed word. An empty or blank phrase is an
    /// invalid-argument error.
    pub fn correct(&self, phrase: &str) -> Result<String> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() {
            return Err(CassiaError::invalid_argument("phrase must be non-empty"));
        }

        // Candidate sets are computed once per distinct word, not per
        // position or per candidate-phrase expansion.
        let mut candidate_sets: AHashMap<&str, Vec<String>> = AHashMap::new();
        for word in &words {
            candidate_sets
                .entry(word)
                .or_insert_with(|| self.candidates.similar_words(word));
        }

        for (word, candidates) in &candidate_sets {
            debug!("{} candidates for '{}'", candidates.len(), word);
        }

        let phrases =
            possible_phrases(&words, &candidate_sets, self.config.max_corrections, false);
        debug!("{} candidate phrases", phrases.len());

        let mut best: Option<(f64, &Vec<&str>)> = None;
        for candidate in &phrases {
            let score = self.phrase_score(candidate, &words)?;
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, candidate)),
            }
        }

        match best {
            Some((_, candidate)) => Ok(candidate.join(" ")),
            None => Ok(words.join(" ")),
        }
    }

    /// Log-domain score of a candidate phrase against the typed phrase.
    fn phrase_score(&self, candidate: &[&str], original: &[&str]) -> Result<f64> {
        let mut score = 0.0;

        for i in 0..candidate.len() {
            let word = candidate[i];
            let original_word = original[i];

            let prev_term = if i == 0 {
                1.0
            } else {
                self.language_model
                    .probability_given_prev(word, candidate[i - 1])?
            };
            let next_term = if i + 1 == candidate.len() {
                1.0
            } else {
                self.language_model
                    .probability_given_next(word, candidate[i + 1])?
            };

            let channel_term = if word == original_word {
                self.config.no_error_probability
            } else {
                let unigram = self.language_model.unigram_probability(word)?;
                let edit_probability = self
                    .error_model
                    .probability_correction(original_word, word)?;
                unigram * edit_probability.powf(self.config.channel_weight)
            };

            // Summing logs instead of multiplying raw probabilities avoids
            // underflow over longer phrases.
            score += (channel_term * prev_term * next_term).ln();
        }

        Ok(score)
    }
}

/// Enumerate every candidate phrase with at most `corrections_left`
/// corrections, none of them adjacent.
///
/// The budget and the adjacency flag travel as value parameters, so the
/// recursion has no shared mutable state.
fn possible_phrases<'a>(
    words: &[&'a str],
    candidate_sets: &'a AHashMap<&str, Vec<String>>,
    corrections_left: usize,
    prev_was_correction: bool,
) -> Vec<Vec<&'a str>> {
    // BASE
    let Some((first_word, remaining)) = words.split_first() else {
        return vec![Vec::new()];
    };

    // STEP
    let mut phrases = Vec::new();
    for candidate in candidate_sets
        .get(first_word)
        .map(Vec::as_slice)
        .unwrap_or_default()
    {
        let is_identity = candidate == first_word;
        if !is_identity && (corrections_left == 0 || prev_was_correction) {
            continue;
        }

        let tails = if is_identity {
            possible_phrases(remaining, candidate_sets, corrections_left, false)
        } else {
            possible_phrases(remaining, candidate_sets, corrections_left - 1, true)
        };

        for mut tail in tails {
            tail.insert(0, candidate.as_str());
            phrases.push(tail);
        }
    }

    phrases
}
