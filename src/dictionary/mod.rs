//! Dictionary loading.
//!
//! Reads line-oriented `<word> <frequency>` sources into a [`PrefixIndex`].
//! Lines are split on single spaces with trailing empty tokens dropped;
//! anything that does not leave exactly two tokens is skipped. A frequency
//! that is not a non-negative integer aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::DictionaryConfig;
use crate::data_structures::PrefixIndex;
use crate::error::dictionary::DictionaryError;
use crate::error::{ErrorContext, ErrorReporter, WordRankResult};

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// One parsed `<word> <frequency>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The word, already normalised
    pub word: String,

    /// Its frequency
    pub frequency: u64,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines inserted into the index
    pub inserted: usize,

    /// Lines skipped because they were not `<word> <frequency>`
    pub skipped: usize,
}

/// Parses dictionary sources and feeds them into an index.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    lowercase: bool,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl DictionaryLoader {
    /// Creates a loader that lowercases words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether words are lowercased before insertion.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Creates a loader from the dictionary configuration section.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new().with_lowercase(config.lowercase)
    }

    /// Parses one line.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(entry))` - The line is a valid entry.
    /// * `Ok(None)` - The line does not have the `<word> <frequency>` shape.
    /// * `Err(DictionaryError::InvalidFrequency)` - The frequency is not a
    ///   non-negative integer.
    pub fn parse_line(&self, line_number: usize, line: &str) -> DictionaryResult<Option<DictionaryEntry>> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut tokens: Vec<&str> = line.split(' ').collect();
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        let &[word, frequency] = tokens.as_slice() else {
            return Ok(None);
        };
        if word.is_empty() {
            return Ok(None);
        }

        let frequency = frequency
            .parse::<u64>()
            .map_err(|source| DictionaryError::InvalidFrequency {
                line: line_number,
                value: frequency.to_string(),
                source,
            })?;

        let word = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        Ok(Some(DictionaryEntry { word, frequency }))
    }

    /// Loads every entry from `reader` into `index`.
    ///
    /// Bytes that are not valid UTF-8 are decoded as U+FFFD rather than
    /// ending the load.
    pub fn load_reader<R: BufRead>(&self, mut reader: R, index: &mut PrefixIndex) -> DictionaryResult<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let line = String::from_utf8_lossy(raw);

            let Some(entry) = self.parse_line(line_number, &line)? else {
                debug!(line = line_number, "Skipping malformed dictionary line");
                report.skipped += 1;
                continue;
            };

            match index.insert(&entry.word, entry.frequency) {
                Ok(()) => report.inserted += 1,
                Err(err) => {
                    warn!(line = line_number, error = %err, "Rejected dictionary entry");
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }

    /// Loads every entry from the file at `path` into `index`.
    pub fn load_path<P: AsRef<Path>>(&self, path: P, index: &mut PrefixIndex) -> DictionaryResult<LoadReport> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let report = self
            .load_reader(BufReader::new(file), index)
            .map_err(|err| match err {
                DictionaryError::Read(source) => io_error(source),
                other => other,
            })?;

        info!(
            path = %path.display(),
            inserted = report.inserted,
            skipped = report.skipped,
            words = index.len(),
            "Dictionary loaded"
        );

        Ok(report)
    }
}

/// Builds an index from the configured dictionary file.
///
/// A file that cannot be read is passed to `reporter` and yields an empty
/// index, never a partly loaded one. Bad content, such as an invalid
/// frequency, is returned as an error.
pub fn load_or_report(config: &DictionaryConfig, reporter: &dyn ErrorReporter) -> WordRankResult<PrefixIndex> {
    let mut index = PrefixIndex::new();

    match DictionaryLoader::from_config(config).load_path(&config.path, &mut index) {
        Ok(_) => Ok(index),
        Err(err) if err.is_io() => {
            reporter.report(
                ErrorContext::new(err.into(), "dictionary")
                    .with_details("continuing with an empty index"),
            );
            Ok(PrefixIndex::new())
        }
        Err(err) => Err(err.into()),
    }
}
