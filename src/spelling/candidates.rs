//! Candidate word generation for spelling correction.

use crate::corpus::vocabulary::Vocabulary;
use crate::spelling::edit::damerau_levenshtein_distance;

/// Maximum edit distance between a word and its correction candidates.
const MAX_CANDIDATE_DISTANCE: usize = 1;

/// Generates the vocabulary words a given word may be corrected to.
///
/// This is the dominant cost driver of a correction call: `O(V * L^2)` per
/// distinct input word for vocabulary size `V` and word length `L`. Callers
/// compute the candidate set once per distinct word in a phrase and reuse it.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    vocabulary: Vocabulary,
}

impl CandidateGenerator {
    /// Create a generator over the given vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        CandidateGenerator { vocabulary }
    }

    /// Size of the underlying vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check if a word is a vocabulary member.
    pub fn is_known(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Vocabulary words within Damerau-Levenshtein distance 1 of `word`.
    ///
    /// The word itself is always the first candidate, whether or not it is
    /// in the vocabulary, so the "no correction" choice always exists. The
    /// remaining candidates are sorted, keeping enumeration deterministic.
    pub fn similar_words(&self, word: &str) -> Vec<String> {
        let word_len = word.chars().count();

        let mut similar: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|candidate| {
                // Words whose lengths differ by more than the distance bound
                // cannot be within it; skip the table for those.
                candidate.chars().count().abs_diff(word_len) <= MAX_CANDIDATE_DISTANCE
            })
            .filter(|candidate| {
                *candidate != word
                    && damerau_levenshtein_distance(word, candidate) <= MAX_CANDIDATE_DISTANCE
            })
            .map(String::from)
            .collect();
        similar.sort_unstable();

        let mut candidates = Vec::with_capacity(similar.len() + 1);
        candidates.push(word.to_string());
        candidates.extend(similar);
        candidates
    }
}
