//! Dictionary error module.
//!
//! Errors raised while reading `<word> <frequency>` sources. They belong to
//! the loader; the index never performs I/O.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file cannot be opened or read.
    #[error("Failed to read dictionary {path:?}: {source}")]
    Io {
        /// The dictionary path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when reading from an in-memory or streamed source fails.
    #[error("Failed to read dictionary source: {0}")]
    Read(#[from] std::io::Error),

    /// Error when the frequency token is not a non-negative integer.
    #[error("Invalid frequency '{value}' on line {line}: {source}")]
    InvalidFrequency {
        /// 1-based line number
        line: usize,
        /// The offending token
        value: String,
        /// The parse failure
        #[source]
        source: ParseIntError,
    },
}

impl DictionaryError {
    /// Whether this is a failure to reach the source rather than bad content.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Read(_))
    }
}
