//! N-gram count table for the language model.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{CassiaError, Result};

/// Observed counts for unigrams and bigrams.
///
/// Keys are space-joined word sequences of one or two words, exactly as they
/// appear in the count file. Missing keys resolve to a count of 0 and are
/// never an error.
#[derive(Debug, Clone, Default)]
pub struct NGramCounts {
    counts: AHashMap<String, u64>,
}

impl NGramCounts {
    /// Create an empty count table.
    pub fn new() -> Self {
        NGramCounts {
            counts: AHashMap::new(),
        }
    }

    /// Add a count for an n-gram, accumulating if the key already exists.
    pub fn add_count(&mut self, ngram: &str, count: u64) {
        *self.counts.entry(ngram.to_string()).or_insert(0) += count;
    }

    /// Get the count for an n-gram, or 0 if it was never observed.
    pub fn count(&self, ngram: &str) -> u64 {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Get the count for the bigram `first second`.
    pub fn bigram_count(&self, first: &str, second: &str) -> u64 {
        self.count(&format!("{first} {second}"))
    }

    /// Number of distinct n-gram entries in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Parse counts from a reader with one `<count> <ngram>` entry per line.
    ///
    /// The line is split at the first space; everything after it is the
    /// n-gram text. A non-integer count is a load-time error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = NGramCounts::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (count_text, ngram) = line.split_once(' ').ok_or_else(|| {
                CassiaError::corpus(format!("malformed n-gram line <{line}>"))
            })?;

            let count = count_text.parse::<u64>().map_err(|_| {
                CassiaError::corpus(format!("non-integer n-gram count <{count_text}>"))
            })?;

            table.add_count(ngram, count);
        }

        Ok(table)
    }

    /// Load counts from a text file with one `<count> <ngram>` entry per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
