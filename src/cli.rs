// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Helpers behind the `trie_dictionary` binary.
//!
//! Output is returned as strings so the binary only has to print it.

use std::path::Path;

use serde::Serialize;

use crate::config::AppConfig;
use crate::data_structures::trie::Trie;
use crate::error::config::ConfigError;
use crate::error::{DictionaryError, DictionaryResult};
use crate::wordlist::load_word_list;

/// JSON shape for `check`.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    word: &'a str,
    found: bool,
}

/// Loads the dictionary named on the command line, falling back to
/// `dictionary.word_list` from the configuration.
///
/// # Returns
///
/// * `Ok(Trie)` - The loaded dictionary.
/// * `Err(DictionaryError::Config)` - If neither source names a word list.
/// * `Err(DictionaryError::WordList)` - If the file could not be read.
pub fn build_trie(words: Option<&Path>, config: &AppConfig) -> DictionaryResult<Trie> {
    let path = words
        .or(config.dictionary.word_list.as_deref())
        .ok_or_else(|| ConfigError::MissingValue("dictionary.word_list".to_string()))?;

    load_word_list(path, &config.dictionary)
}

/// Formats a word list, one word per line or as a JSON array.
pub fn format_words(words: &[String], json: bool) -> DictionaryResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(words)? + "\n");
    }
    Ok(words.iter().map(|word| format!("{word}\n")).collect())
}

/// Formats the result of a membership check.
pub fn format_check(word: &str, found: bool, json: bool) -> DictionaryResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&CheckOutput { word, found })? + "\n");
    }
    Ok(format!("{word}: {}\n", if found { "found" } else { "not found" }))
}

/// Writes the default configuration as TOML, creating parent directories.
pub fn write_default_config(output: &Path) -> DictionaryResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| DictionaryError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;
    Ok(())
}
