//! Vocabulary of valid correction targets.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// The set of known words a misspelling may be corrected to.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: AHashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            words: AHashSet::new(),
        }
    }

    /// Build a vocabulary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a word to the vocabulary.
    pub fn add_word(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }

    /// Check if a word is a vocabulary member.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Parse a vocabulary from a reader with one word per line.
    ///
    /// Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut vocabulary = Vocabulary::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                vocabulary.add_word(word);
            }
        }

        Ok(vocabulary)
    }

    /// Load a vocabulary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_vocabulary_basic_operations() {
        let mut vocabulary = Vocabulary::new();
        assert!(vocabulary.is_empty());
        assert!(!vocabulary.contains("the"));

        vocabulary.add_word("the");
        vocabulary.add_word("cat");
        vocabulary.add_word("the");

        assert!(vocabulary.contains("the"));
        assert!(vocabulary.contains("cat"));
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_from_words() {
        let vocabulary = Vocabulary::from_words(["the", "cat", "sat"]);
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("sat"));
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let data = "the\n\ncat\n  \nsat\n";
        let vocabulary = Vocabulary::from_reader(data.as_bytes()).unwrap();
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "home").unwrap();
        writeln!(temp_file, "locations").unwrap();
        temp_file.flush().unwrap();

        let vocabulary = Vocabulary::load_from_file(temp_file.path()).unwrap();
        assert!(vocabulary.contains("home"));
        assert!(vocabulary.contains("locations"));
        assert_eq!(vocabulary.len(), 2);
    }
}
