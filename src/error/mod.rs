//! Error module for wordrank.
//!
//! Every fallible operation outside the index returns [`WordRankResult`].
//! Domain errors keep their own enums and convert into [`WordRankError`]
//! with `?`.

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::data_structures::PrefixIndexError;

pub mod config;
pub mod dictionary;

/// Result type alias used throughout wordrank.
pub type WordRankResult<T> = Result<T, WordRankError>;

/// Core error enum for wordrank.
#[derive(Error, Debug)]
pub enum WordRankError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while reading a dictionary source.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] dictionary::DictionaryError),

    /// Invalid arguments passed to the prefix index.
    #[error("Index error: {0}")]
    Index(#[from] PrefixIndexError),

    /// IO errors that may occur during file or terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// An error together with where it happened.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: WordRankError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: WordRankError, component: S) -> Self {
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

/// Sink for errors that are reported and then recovered from.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Reports errors through the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
