//! Input error module.
//!
//! Errors raised while reading the count-prefixed stream of patterns and queries.

use std::fmt;
use thiserror::Error;

/// The part of the input stream being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSection {
    /// The pattern block
    Patterns,
    /// The query block
    Queries,
}

impl fmt::Display for InputSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patterns => f.write_str("pattern"),
            Self::Queries => f.write_str("query"),
        }
    }
}

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The stream ended where a count was expected.
    #[error("Missing {section} count")]
    MissingCount {
        /// The block whose count is missing
        section: InputSection,
    },

    /// A count token is not a non-negative integer.
    #[error("Invalid {section} count '{token}'")]
    InvalidCount {
        /// The block whose count is invalid
        section: InputSection,
        /// The offending token
        token: String,
    },

    /// The stream ended before all announced entries were read.
    #[error("Expected {expected} {section} entries, found {found}")]
    Truncated {
        /// The block that is short
        section: InputSection,
        /// The announced count
        expected: usize,
        /// The entries actually present
        found: usize,
    },

    /// The underlying reader failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;
