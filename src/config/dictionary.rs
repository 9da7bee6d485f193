// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary configuration module.
//!
//! Where the word list lives, how it is parsed, and how forgiving spelling
//! suggestions are.

use super::{ConfigResult, Validate};
use crate::data_structures::trie::{TrieConfig, DEFAULT_MAX_EDIT_DISTANCE};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `max_edit_distance`.
pub const MAX_EDIT_DISTANCE_LIMIT: usize = 16;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Word list to load, one word per line
    pub word_list: Option<PathBuf>,

    /// Largest edit distance at which a word is suggested
    pub max_edit_distance: usize,

    /// Whether lines starting with `#` are skipped
    pub skip_comments: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            skip_comments: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_edit_distance > MAX_EDIT_DISTANCE_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_edit_distance must be at most {MAX_EDIT_DISTANCE_LIMIT}, got {}",
                self.max_edit_distance
            )));
        }

        if let Some(path) = &self.word_list {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "word_list must not be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl From<&DictionaryConfig> for TrieConfig {
    fn from(config: &DictionaryConfig) -> Self {
        TrieConfig::new().with_max_edit_distance(config.max_edit_distance)
    }
}
