//! Dictionary source configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary location, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Where the word list comes from and how its words are normalised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to a `<word> <frequency>` file
    pub path: PathBuf,

    /// Whether words are lowercased before insertion
    pub lowercase: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            lowercase: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
