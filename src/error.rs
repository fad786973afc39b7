//! Error types for the typomatch library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! [`TypoError`] enum. Degenerate but valid input (empty strings, zero-magnitude
//! vectors) never produces an error; only arguments that cannot be given a
//! meaning do.
//!
//! # Examples
//!
//! ```
//! use typomatch::error::{Result, TypoError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypoError::invalid_argument("gram width must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for typomatch operations.
#[derive(Error, Debug)]
pub enum TypoError {
    /// An argument that has no defined meaning (zero gram width, empty corpus, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading corpus, candidate or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying context, such as the file a read failed on
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TypoError.
pub type Result<T> = std::result::Result<T, TypoError>;

impl TypoError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TypoError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TypoError::Config(msg.into())
    }

    /// Whether this error reports a rejected argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TypoError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TypoError::invalid_argument("gram width must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid argument: gram width must be positive"
        );
        assert!(error.is_invalid_argument());

        let error = TypoError::config("threshold out of range");
        assert_eq!(error.to_string(), "Configuration error: threshold out of range");
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let typo_error = TypoError::from(io_error);

        match typo_error {
            TypoError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_keeps_source_message() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let typo_error = TypoError::from(anyhow::Error::new(io_error).context("reading words.txt"));

        assert!(matches!(typo_error, TypoError::Anyhow(_)));
        assert_eq!(typo_error.to_string(), "reading words.txt: File not found");
    }
}
