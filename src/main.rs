//! Wordrank - Main entrypoint.
//!
//! Initializes logging, loads configuration and the dictionary, then either
//! runs the interactive console or answers a single prefix.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordrank_lib::config::{ConfigLoader, LogConfig, WordRankConfig, ENV_PREFIX};
use wordrank_lib::dictionary::load_or_report;
use wordrank_lib::error::{TracingErrorReporter, WordRankError, WordRankResult};
use wordrank_lib::repl::{parse_limit, render_completion, Console};

/// Command line arguments for wordrank.
#[derive(Parser, Debug)]
#[clap(name = "wordrank", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive completion console
    Repl,

    /// Print ranked completions for a single prefix
    Complete {
        /// Prefix to complete (lowercased like console input)
        prefix: String,

        /// Maximum number of suggestions (at least 1)
        #[clap(short, long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Print suggestions with frequencies as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so console
/// output stays clean.
fn init_logging(config: &LogConfig) -> WordRankResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| WordRankError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> WordRankResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(mut config) => {
            if let Some(path) = args.dictionary {
                config.dictionary.path = path;
            }
            config
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let index = load_or_report(&config.dictionary, &TracingErrorReporter)?;
            info!(words = index.len(), "Starting console");

            let stdin = io::stdin();
            let answered = Console::new(&config.completion).run(&index, stdin.lock(), io::stdout())?;
            info!(answered, "Console closed");
            Ok(())
        }
        Command::Complete { prefix, limit, json } => {
            let index = load_or_report(&config.dictionary, &TracingErrorReporter)?;
            let limit = limit.or(config.completion.max_suggestions);
            println!("{}", render_completion(&index, &prefix, limit, json)?);
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = WordRankConfig::default().to_toml()?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
