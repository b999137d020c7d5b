//! Completion presentation configuration module.
//!
//! These settings shape what the console shows. They never change how the
//! index ranks.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default input that ends the console loop.
pub const DEFAULT_EXIT_SENTINEL: &str = "exit";

/// Console and one-shot completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Maximum number of suggestions displayed (unset shows all)
    pub max_suggestions: Option<usize>,

    /// Input line that terminates the console loop
    pub exit_sentinel: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            exit_sentinel: DEFAULT_EXIT_SENTINEL.to_string(),
        }
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be greater than 0 when set".to_string(),
            ));
        }

        if self.exit_sentinel.is_empty() {
            return Err(ConfigError::ValidationError(
                "exit_sentinel must not be empty".to_string(),
            ));
        }

        // Input lines are compared after trimming the line terminator only.
        if self.exit_sentinel.trim() != self.exit_sentinel {
            return Err(ConfigError::ValidationError(
                "exit_sentinel must not start or end with whitespace".to_string(),
            ));
        }

        Ok(())
    }
}
