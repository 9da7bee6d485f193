// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the trie dictionary.
//!
//! Everything here is single-threaded and in-memory. A caller that shares a
//! structure across threads must wrap the whole value in one lock, since
//! deletion mutates a full path of nodes at once.

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieConfig, TrieError, TrieResult};
