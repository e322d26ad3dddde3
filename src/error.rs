//! Error types for the WordNet library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! [`WordNetError`] enum. Argument problems (unknown nouns, vertex ids out of
//! range, a hypernym graph that is not a rooted DAG) are all reported as
//! invalid-argument class errors; see [`WordNetError::is_invalid_argument`].
//!
//! A missing ancestral path is *not* an error. Queries report it through the
//! `-1` sentinel instead.
//!
//! # Examples
//!
//! ```
//! use wordnet::error::{Result, WordNetError};
//!
//! fn lookup(word: &str) -> Result<()> {
//!     Err(WordNetError::invalid_argument(format!("'{word}' is not a noun")))
//! }
//!
//! let err = lookup("qwerty").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for WordNet operations.
#[derive(Error, Debug)]
pub enum WordNetError {
    /// Null/empty required argument, unknown noun or out-of-range vertex.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The hypernym graph does not have exactly one root.
    #[error("Invalid argument: hypernym graph must have exactly one root, found {roots}")]
    NotRooted { roots: usize },

    /// The hypernym graph contains a directed cycle.
    #[error("Invalid argument: hypernym graph contains a cycle through {cycle:?}")]
    Cycle { cycle: Vec<usize> },

    /// Malformed synset or hypernym input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

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

/// Result type alias for operations that may fail with WordNetError.
pub type Result<T> = std::result::Result<T, WordNetError>;

impl WordNetError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordNetError::InvalidArgument(msg.into())
    }

    /// Create a new parse error for a 1-based input line.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        WordNetError::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordNetError::Other(msg.into())
    }

    /// Whether this error belongs to the invalid-argument class.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            WordNetError::InvalidArgument(_)
                | WordNetError::NotRooted { .. }
                | WordNetError::Cycle { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordNetError::invalid_argument("vertex 9 out of range");
        assert_eq!(error.to_string(), "Invalid argument: vertex 9 out of range");

        let error = WordNetError::parse(3, "missing noun field");
        assert_eq!(error.to_string(), "Parse error on line 3: missing noun field");

        let error = WordNetError::NotRooted { roots: 2 };
        assert_eq!(
            error.to_string(),
            "Invalid argument: hypernym graph must have exactly one root, found 2"
        );
    }

    #[test]
    fn test_invalid_argument_class() {
        assert!(WordNetError::invalid_argument("x").is_invalid_argument());
        assert!(WordNetError::NotRooted { roots: 0 }.is_invalid_argument());
        assert!(
            WordNetError::Cycle {
                cycle: vec![0, 1, 0]
            }
            .is_invalid_argument()
        );
        assert!(!WordNetError::other("x").is_invalid_argument());
        assert!(!WordNetError::parse(1, "x").is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wordnet_error = WordNetError::from(io_error);

        match wordnet_error {
            WordNetError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
