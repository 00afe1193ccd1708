//! Confusion matrix of character-level edit counts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{CassiaError, Result};

/// Counts of observed edit patterns from a labeled error corpus.
///
/// Keys have the form `<bad>|<good>` where bad/good are 0-2 character
/// substrings and a space character denotes a word boundary. The running
/// total of all counts is kept at load time; it is the normalizing constant
/// of the channel model.
#[derive(Debug, Clone, Default)]
pub struct ConfusionCounts {
    counts: AHashMap<String, u64>,
    total: u64,
}

impl ConfusionCounts {
    /// Create an empty confusion table.
    pub fn new() -> Self {
        ConfusionCounts {
            counts: AHashMap::new(),
            total: 0,
        }
    }

    /// Add a count for an edit pattern, accumulating if the key exists.
    pub fn add_count(&mut self, pattern: &str, count: u64) {
        *self.counts.entry(pattern.to_string()).or_insert(0) += count;
        self.total += count;
    }

    /// Get the count for an edit pattern, or 0 if it was never observed.
    pub fn count(&self, pattern: &str) -> u64 {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    /// Sum of all observed confusion events.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct edit patterns.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Parse a confusion matrix from a reader with one `<pattern> <count>`
    /// entry per line.
    ///
    /// The split happens at the *last* space of the line because patterns
    /// may themselves contain spaces as word-boundary markers; only trailing
    /// whitespace is trimmed. A non-integer count is a load-time error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = ConfusionCounts::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let (pattern, count_text) = line.rsplit_once(' ').ok_or_else(|| {
                CassiaError::corpus(format!("malformed confusion line <{line}>"))
            })?;

            let count = count_text.parse::<u64>().map_err(|_| {
                CassiaError::corpus(format!("non-integer confusion count <{count_text}>"))
            })?;

            table.add_count(pattern, count);
        }

        Ok(table)
    }

    /// Load a confusion matrix from a text file.
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
    fn test_counts_basic_operations() {
        let mut counts = ConfusionCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);

        counts.add_count("c|ct", 36);
        counts.add_count("e|i", 64);

        assert_eq!(counts.count("c|ct"), 36);
        assert_eq!(counts.count("i|e"), 0);
        assert_eq!(counts.total(), 100);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_from_reader_splits_on_last_space() {
        // Patterns may contain a space as a word-boundary marker.
        let data = "c|ct 36\n a| ab 4\nht|th 12\n";
        let counts = ConfusionCounts::from_reader(data.as_bytes()).unwrap();

        assert_eq!(counts.count("c|ct"), 36);
        assert_eq!(counts.count(" a| ab"), 4);
        assert_eq!(counts.count("ht|th"), 12);
        assert_eq!(counts.total(), 52);
    }

    #[test]
    fn test_malformed_count_is_an_error() {
        let data = "c|ct thirty\n";
        let result = ConfusionCounts::from_reader(data.as_bytes());

        match result {
            Err(CassiaError::Corpus(msg)) => assert!(msg.contains("thirty")),
            other => panic!("expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "n|nd 28").unwrap();
        writeln!(temp_file, "e| 17").unwrap();
        temp_file.flush().unwrap();

        let counts = ConfusionCounts::load_from_file(temp_file.path()).unwrap();
        assert_eq!(counts.count("n|nd"), 28);
        assert_eq!(counts.count("e|"), 17);
        assert_eq!(counts.total(), 45);
    }
}
