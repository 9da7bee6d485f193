// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Dictionary Library
//!
//! An in-memory prefix-tree dictionary: word insertion, lookup and deletion,
//! prefix autocompletion, and "did you mean" suggestions by edit distance.
//! The binary crate wraps it in a small command-line tool, but the library
//! can be used on its own.
//!
//! # Example
//!
//! ```
//! use trie_dictionary_lib::Trie;
//!
//! let trie: Trie = ["hello", "hell", "heaven", "heavy"].into_iter().collect();
//! assert_eq!(trie.auto_suggest("hea"), vec!["heaven", "heavy"]);
//! ```

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::trie::{Trie, TrieConfig, TrieError};

/// Version information for the trie dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
///
/// Routes reported errors through `tracing`.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
