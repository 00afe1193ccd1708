//! Damerau-Levenshtein distance and edit pattern extraction.

use std::cmp::min;

/// Marker character for a word boundary in edit patterns.
///
/// The confusion matrix treats a space as a regular character, so edits
/// touching the first letter of a word stay representable.
pub const BOUNDARY: char = ' ';

/// Calculate the Damerau-Levenshtein distance between two strings.
/// This is the minimum number of single-character insertions, deletions,
/// substitutions, or adjacent transpositions required to change one word
/// into another.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    // Fill the matrix
    for i in 1..=len1 {
        for j in 1..=len2 {
            if s1_chars[i - 1] == s2_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
                continue;
            }

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + 1, // substitution
            );

            // Check for transposition
            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(
                    matrix[i][j],
                    matrix[i - 2][j - 2] + 1, // transposition
                );
            }
        }
    }

    matrix[len1][len2]
}

/// The kind of single-character edit separating two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insertion,
    Deletion,
    Substitution,
    Transposition,
}

/// A specific character-level edit, keyed as `<bad>|<good>` in the
/// confusion matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPattern {
    /// Edit classification, `None` for identical words.
    pub kind: Option<EditKind>,
    /// The typed (erroneous) substring, 0-2 characters.
    pub bad: String,
    /// The intended substring, 0-2 characters.
    pub good: String,
}

impl EditPattern {
    /// The no-op pattern for identical words.
    pub fn none() -> Self {
        EditPattern::default()
    }

    fn new(kind: EditKind, bad: String, good: String) -> Self {
        EditPattern {
            kind: Some(kind),
            bad,
            good,
        }
    }

    /// Check whether this is the no-op pattern.
    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    /// Confusion-matrix lookup key, e.g. `"ht|th"`.
    pub fn key(&self) -> String {
        format!("{}|{}", self.bad, self.good)
    }
}

/// Find the edit that turns `original` into `corrected`.
///
/// Only meaningful when the two words are within Damerau-Levenshtein
/// distance 1. A word-boundary marker is prepended to both words first so
/// edits at the start of a word are representable; indices below are into
/// the marked words.
pub fn edit_between(original: &str, corrected: &str) -> EditPattern {
    let original: Vec<char> = std::iter::once(BOUNDARY).chain(original.chars()).collect();
    let corrected: Vec<char> = std::iter::once(BOUNDARY).chain(corrected.chars()).collect();

    let end_index = original.len().max(corrected.len());
    for i in 1..end_index {
        let past_shorter_word = i == end_index - 1 && original.len() != corrected.len();
        let differs = match (original.get(i), corrected.get(i)) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        };
        if !past_shorter_word && !differs {
            continue;
        }

        if original.len() == corrected.len() {
            if i + 1 < original.len() && original[i + 1] != corrected[i + 1] {
                // Adjacent characters swapped
                return EditPattern::new(
                    EditKind::Transposition,
                    original[i..=i + 1].iter().collect(),
                    corrected[i..=i + 1].iter().collect(),
                );
            }
            return EditPattern::new(
                EditKind::Substitution,
                original[i].to_string(),
                corrected[i].to_string(),
            );
        } else if original.len() > corrected.len() {
            // The typed word carries an extra character
            return EditPattern::new(
                EditKind::Deletion,
                original[i - 1..=i].iter().collect(),
                original[i - 1].to_string(),
            );
        } else {
            // The typed word dropped a character
            return EditPattern::new(
                EditKind::Insertion,
                original[i - 1].to_string(),
                corrected[i - 1..=i].iter().collect(),
            );
        }
    }

    EditPattern::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("", "a"), 1);
        assert_eq!(damerau_levenshtein_distance("a", ""), 1);
        assert_eq!(damerau_levenshtein_distance("a", "a"), 0);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1); // transposition
        assert_eq!(damerau_levenshtein_distance("teh", "the"), 1); // transposition
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance_identity_and_symmetry() {
        let words = ["", "a", "teh", "conditions", "measure"];

        for w in words {
            assert_eq!(damerau_levenshtein_distance(w, w), 0);
        }

        for a in words {
            for b in words {
                assert_eq!(
                    damerau_levenshtein_distance(a, b),
                    damerau_levenshtein_distance(b, a),
                    "asymmetric for {a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_transposition_pattern() {
        let pattern = edit_between("hte", "the");
        assert_eq!(pattern.kind, Some(EditKind::Transposition));
        assert_eq!(pattern.key(), "ht|th");
    }

    #[test]
    fn test_substitution_pattern() {
        let pattern = edit_between("moce", "mice");
        assert_eq!(pattern.kind, Some(EditKind::Substitution));
        assert_eq!(pattern.key(), "o|i");
    }

    #[test]
    fn test_deletion_pattern() {
        // The typo has an extra 'o'
        let pattern = edit_between("hoome", "home");
        assert_eq!(pattern.kind, Some(EditKind::Deletion));
        assert_eq!(pattern.key(), "oo|o");
    }

    #[test]
    fn test_insertion_pattern() {
        // The typo dropped the 'd'
        let pattern = edit_between("conitions", "conditions");
        assert_eq!(pattern.kind, Some(EditKind::Insertion));
        assert_eq!(pattern.key(), "n|nd");
    }

    #[test]
    fn test_insertion_at_end_of_word() {
        let pattern = edit_between("transgen", "transgene");
        assert_eq!(pattern.kind, Some(EditKind::Insertion));
        assert_eq!(pattern.key(), "n|ne");
    }

    #[test]
    fn test_edit_at_word_start_uses_boundary_marker() {
        // The typo dropped the leading 'h'; the boundary marker carries it
        let pattern = edit_between("ome", "home");
        assert_eq!(pattern.kind, Some(EditKind::Insertion));
        assert_eq!(pattern.key(), " | h");
    }

    #[test]
    fn test_identical_words_have_no_pattern() {
        let pattern = edit_between("home", "home");
        assert!(pattern.is_none());
        assert_eq!(pattern.key(), "|");
    }
}
