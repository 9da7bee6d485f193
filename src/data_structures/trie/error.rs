// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the dictionary trie.

/// Errors that can occur in trie operations.
///
/// Lookups that simply miss are not errors; they are reported as `false` or
/// an empty result. Only precondition violations end up here.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// An operation that needs a first character was given an empty word.
    #[error("Word must not be empty")]
    EmptyWord,
}

/// Result type for trie operations
pub type TrieResult<T> = std::result::Result<T, TrieError>;
