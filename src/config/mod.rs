//! Configuration module for wordrank.
//!
//! This module provides a configuration system that loads settings from a
//! file (TOML, YAML, JSON) and overrides them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod completion;
pub mod dictionary;

pub use completion::CompletionConfig;
pub use dictionary::DictionaryConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WORDRANK";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for wordrank.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordRankConfig {
    /// Dictionary source configuration
    pub dictionary: DictionaryConfig,

    /// Completion display configuration
    pub completion: CompletionConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl WordRankConfig {
    /// Renders the configuration as pretty TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for WordRankConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.completion.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for wordrank.
///
/// Sources are layered in order: built-in defaults, the optional file, then
/// environment variables such as `WORDRANK__DICTIONARY__PATH`.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(WordRankConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<WordRankConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&WordRankConfig::default()).map_err(parse_error)?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: WordRankConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(parse_error)?;

        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");

        Ok(config)
    }
}

fn parse_error(err: config::ConfigError) -> ConfigError {
    ConfigError::ParseError(err.to_string())
}
