// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Dictionary - command-line entrypoint.
//!
//! Loads configuration and a word list, then answers a single query against
//! the resulting trie. Results go to stdout, logs to stderr.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use trie_dictionary_lib::cli::{build_trie, format_check, format_words, write_default_config};
use trie_dictionary_lib::config::{self, AppConfig, ConfigLoader, LogConfig};
use trie_dictionary_lib::error::{report_error, DictionaryError, DictionaryResult, ErrorContext};

/// Command line arguments for the trie dictionary.
#[derive(Parser, Debug)]
#[clap(name = "trie_dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load (overrides `dictionary.word_list`)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up
        word: String,
    },

    /// List every word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Suggest corrections for a possibly misspelled word
    Suggest {
        /// Word to correct
        word: String,
    },

    /// List every word in the dictionary
    Words,

    /// Print the trie structure
    Tree,

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
fn init_logging(log: &LogConfig) -> DictionaryResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| DictionaryError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run(args: Args, config: AppConfig) -> DictionaryResult<()> {
    let words = args.words.as_deref();
    let output = match &args.command {
        Command::Check { word } => {
            let trie = build_trie(words, &config)?;
            format_check(word, trie.search(word), args.json)?
        }
        Command::Complete { prefix } => {
            let trie = build_trie(words, &config)?;
            format_words(&trie.auto_suggest(prefix), args.json)?
        }
        Command::Suggest { word } => {
            let trie = build_trie(words, &config)?;
            format_words(&trie.spelling_suggestions(word)?, args.json)?
        }
        Command::Words => {
            let trie = build_trie(words, &config)?;
            format_words(&trie.all_words(), args.json)?
        }
        Command::Tree => build_trie(words, &config)?.render_tree(),
        Command::Validate => {
            info!("Configuration validated successfully");
            return Ok(());
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            write_default_config(output)?;
            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
    };

    print!("{output}");
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let app_config = match loader.load() {
        Ok(app_config) => app_config,
        Err(e) => {
            report_error(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&app_config.log) {
        report_error(&ErrorContext::new(e, "logging"));
        process::exit(1);
    }
    trie_dictionary_lib::init();

    let command = format!("{:?}", args.command);
    if let Err(e) = run(args, app_config) {
        report_error(&ErrorContext::new(e, "cli").with_details(command));
        process::exit(1);
    }
}
