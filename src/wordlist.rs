// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-list loading.
//!
//! A word list is plain text with one word per line. Surrounding whitespace
//! is trimmed and blank lines are ignored; lines starting with `#` are
//! comments unless comment skipping is turned off.

use std::path::Path;

use crate::config::DictionaryConfig;
use crate::data_structures::trie::{Trie, TrieConfig};
use crate::error::{DictionaryError, DictionaryResult};

/// Summary of a word-list parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Words that were new to the trie
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
}

/// Inserts every word in `text` into `trie`.
pub fn parse_word_list(text: &str, skip_comments: bool, trie: &mut Trie) -> LoadStats {
    let mut stats = LoadStats::default();

    let words = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(skip_comments && line.starts_with('#')));

    for word in words {
        if trie.insert(word) {
            stats.inserted += 1;
        } else {
            tracing::debug!(%word, "duplicate word in word list");
            stats.duplicates += 1;
        }
    }

    stats
}

/// Builds a trie from the word list at `path`.
///
/// # Arguments
///
/// * `path` - The word list file.
/// * `config` - Dictionary settings; supplies the trie configuration and the
///   comment policy.
///
/// # Returns
///
/// * `Ok(Trie)` - A trie containing every word in the file.
/// * `Err(DictionaryError::WordList)` - If the file could not be read.
pub fn load_word_list<P: AsRef<Path>>(path: P, config: &DictionaryConfig) -> DictionaryResult<Trie> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let mut trie = Trie::with_config(TrieConfig::from(config));
    let stats = parse_word_list(&text, config.skip_comments, &mut trie);

    tracing::info!(
        path = %path.display(),
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        "word list loaded"
    );

    Ok(trie)
}
