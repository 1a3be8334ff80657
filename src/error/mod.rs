//! Error module for wildpath.
//!
//! Matching itself never fails: a query either yields a pattern or no match. The
//! errors here cover everything around it: pattern registration, reading the input
//! stream, configuration and output.

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::data_structures::PatternError;

pub mod config;
pub mod input;

/// Result type alias used throughout wildpath.
pub type WildpathResult<T> = Result<T, WildpathError>;

/// Core error enum for wildpath.
#[derive(Error, Debug)]
pub enum WildpathError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors from parsing or registering a pattern.
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Errors reading the pattern and query stream.
    #[error("Input error: {0}")]
    Input(#[from] input::InputError),

    /// IO errors that may occur while writing results or files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: WildpathError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: WildpathError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Reports an error through the tracing framework.
pub fn report_error(context: &ErrorContext) {
    tracing::error!(
        error = %context.error,
        component = %context.component,
        details = context.details.as_deref().unwrap_or("None"),
        "Error reported"
    );
}
