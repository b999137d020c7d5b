//! Interactive console loop.
//!
//! Reads one prefix per line, prints the ranked completions and stops on the
//! exit sentinel or end of input. All ranking happens in the index; this
//! module only formats.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::CompletionConfig;
use crate::data_structures::{PrefixIndex, SharedPrefixIndex};
use crate::error::WordRankResult;

/// Message printed when a prefix has no completions.
pub const NO_SUGGESTIONS: &str = "No suggestions found.";

/// Anything the console can ask for ranked completions.
pub trait CompletionSource {
    /// Ranked completions for `prefix`, best first.
    fn complete(&self, prefix: &str) -> Vec<String>;
}

impl CompletionSource for PrefixIndex {
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.autocomplete(prefix)
    }
}

impl CompletionSource for SharedPrefixIndex {
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.autocomplete(prefix)
    }
}

/// Formats one answer line the way the console prints it.
pub fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        NO_SUGGESTIONS.to_string()
    } else {
        format!("Suggestions (ranked): [{}]", suggestions.join(", "))
    }
}

/// Parses a suggestion limit, rejecting 0 like `max_suggestions` does.
pub fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be greater than 0".to_string()),
        Ok(limit) => Ok(limit),
        Err(err) => Err(err.to_string()),
    }
}

/// Renders a one-shot completion of `prefix`.
///
/// The prefix is lowercased like console input. With `json` the output is
/// the suggestion array with frequencies, otherwise the console answer line.
pub fn render_completion(index: &PrefixIndex, prefix: &str, limit: Option<usize>, json: bool) -> WordRankResult<String> {
    let mut suggestions = index.suggestions(prefix.to_lowercase());
    if let Some(limit) = limit {
        suggestions.truncate(limit);
    }

    if json {
        return Ok(serde_json::to_string_pretty(&suggestions)?);
    }

    let words: Vec<String> = suggestions.into_iter().map(|s| s.word).collect();
    Ok(format_suggestions(&words))
}

/// Line-oriented completion console.
#[derive(Debug, Clone)]
pub struct Console {
    exit_sentinel: String,
    max_suggestions: Option<usize>,
}

impl Console {
    /// Creates a console from the completion configuration section.
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            exit_sentinel: config.exit_sentinel.to_lowercase(),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Runs the loop until the sentinel or end of input.
    ///
    /// Input is lowercased before lookup, matching how dictionaries are
    /// loaded. Returns the number of prefixes answered.
    pub fn run<S, R, W>(&self, source: &S, mut input: R, mut output: W) -> io::Result<usize>
    where
        S: CompletionSource + ?Sized,
        R: BufRead,
        W: Write,
    {
        let mut answered = 0;
        let mut line = String::new();

        loop {
            write!(output, "\nEnter prefix (or '{}' to quit): ", self.exit_sentinel)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let prefix = line.trim_end_matches(['\n', '\r']).to_lowercase();
            if prefix == self.exit_sentinel {
                break;
            }

            let mut suggestions = source.complete(&prefix);
            if let Some(max) = self.max_suggestions {
                suggestions.truncate(max);
            }
            debug!(prefix = %prefix, count = suggestions.len(), "Answered prefix");

            writeln!(output, "{}", format_suggestions(&suggestions))?;
            answered += 1;
        }

        Ok(answered)
    }
}
