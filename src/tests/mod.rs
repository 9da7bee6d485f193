// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the trie dictionary.
//!
//! Cross-module tests live here: configuration loading, error reporting and
//! word-list files. Trie behaviour is tested beside the trie itself.


pub use test_utils::{word_strategy, TestFixture};
