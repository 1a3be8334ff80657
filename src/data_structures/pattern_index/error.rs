//! Error types for the pattern index.
//!
//! This module defines the errors that can occur while parsing or registering patterns.

/// Errors that can occur in pattern index operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Error when a pattern string yields no segments.
    #[error("Empty pattern not allowed")]
    Empty,

    /// Error when a pattern exceeds the maximum depth configured for the index.
    #[error("Pattern '{pattern}' exceeds maximum index depth of {max_depth}")]
    TooDeep {
        /// The canonical form of the rejected pattern.
        pattern: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for pattern index operations
pub type PatternResult<T> = Result<T, PatternError>;
