//! Error types for the Cassia library.
//!
//! All fallible operations in Cassia return [`Result`], whose error type is
//! the [`CassiaError`] enum.
//!
//! # Examples
//!
//! ```
//! use cassia::error::{CassiaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(CassiaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Cassia operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum CassiaError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed corpus, vocabulary, or confusion-matrix data at load time
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CassiaError.
pub type Result<T> = std::result::Result<T, CassiaError>;

impl CassiaError {
    /// Create a new corpus load error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        CassiaError::Corpus(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CassiaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CassiaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = CassiaError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = CassiaError::invalid_argument("phrase must be non-empty");
        assert_eq!(
            error.to_string(),
            "Error: Invalid argument: phrase must be non-empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let cassia_error = CassiaError::from(io_error);

        match cassia_error {
            CassiaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
