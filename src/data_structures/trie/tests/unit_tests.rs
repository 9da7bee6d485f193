// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the dictionary trie.

use std::collections::HashSet;

use crate::data_structures::trie::{Trie, TrieConfig, TrieError};

fn as_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().collect()
}

fn set_of(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = Trie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);

    // Test insertion
    assert!(trie.insert("hello"));
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());

    // Test retrieval
    assert!(trie.search("hello"));
    assert!(!trie.search("hell"));
    assert!(!trie.search("hello!"));
    assert!(!trie.search("nonexistent"));

    // Test duplicate insertion
    assert!(!trie.insert("hello"));
    assert_eq!(trie.len(), 1);

    // Test removal
    assert!(trie.delete("hello"));
    assert!(trie.is_empty());
    assert!(!trie.delete("hello"));
}

#[test]
fn test_search_is_case_sensitive() {
    let trie: Trie = ["Hello"].into_iter().collect();
    assert!(trie.search("Hello"));
    assert!(!trie.search("hello"));
}

#[test]
fn test_delete_prefix_word_keeps_longer_word() {
    let mut trie = Trie::new();
    trie.insert("hell");
    trie.insert("hello");
    let nodes_before = trie.node_count();

    assert!(trie.delete("hell"));
    assert!(!trie.search("hell"));
    assert!(trie.search("hello"));

    // "hell" is still the path to "hello", nothing may be pruned
    assert_eq!(trie.node_count(), nodes_before);
}

#[test]
fn test_delete_longer_word_keeps_prefix_word() {
    let mut trie = Trie::new();
    trie.insert("hell");
    trie.insert("hello");

    assert!(trie.delete("hello"));
    assert!(trie.search("hell"));
    assert!(!trie.search("hello"));
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_delete_prunes_only_unshared_branch() {
    let mut trie = Trie::new();
    trie.insert("heaven");
    trie.insert("heavy");

    // h-e-a-v shared, then e-n and y
    assert_eq!(trie.node_count(), 7);

    assert!(trie.delete("heaven"));
    assert_eq!(trie.node_count(), 5);
    assert!(trie.search("heavy"));

    assert!(trie.delete("heavy"));
    assert_eq!(trie.node_count(), 0);
    assert!(trie.is_empty());
}

#[test]
fn test_delete_non_word_prefix_fails_without_mutation() {
    let mut trie = Trie::new();
    trie.insert("hello");
    let nodes_before = trie.node_count();

    assert!(!trie.delete("hel"));
    assert!(!trie.delete("help"));
    assert!(!trie.delete("helloo"));
    assert!(!trie.delete(""));

    assert_eq!(trie.node_count(), nodes_before);
    assert!(trie.search("hello"));
}

#[test]
fn test_delete_on_empty_trie() {
    let mut trie = Trie::new();
    assert!(!trie.delete("hello"));
    assert!(trie.is_empty());
}

#[test]
fn test_very_long_words() {
    let long = "a".repeat(100_000);
    let longer = format!("{long}b");

    let mut trie = Trie::new();
    assert!(trie.insert(&long));
    assert!(trie.insert(&longer));
    assert_eq!(trie.node_count(), 100_001);

    assert!(trie.search(&long));
    assert!(!trie.search(&long[1..]));
    assert_eq!(trie.all_words(), vec![long.clone(), longer.clone()]);
    assert_eq!(trie.auto_suggest(&long[..50_000]).len(), 2);

    // Unmarking keeps the shared path alive for the longer word
    assert!(trie.delete(&long));
    assert!(trie.search(&longer));
    assert_eq!(trie.node_count(), 100_001);

    assert!(trie.insert(&long));
    assert!(trie.delete(&longer));
    assert_eq!(trie.node_count(), 100_000);
    assert_eq!(trie.all_words(), vec![long.clone()]);

    trie.insert(&longer);
    drop(trie);
}

#[test]
fn test_empty_word_is_an_ordinary_word() {
    let mut trie = Trie::new();
    assert!(!trie.search(""));

    assert!(trie.insert(""));
    assert!(!trie.insert(""));
    assert!(trie.search(""));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.all_words(), vec![String::new()]);

    trie.insert("a");
    assert!(trie.delete(""));
    assert!(!trie.search(""));
    assert!(trie.search("a"));
}

#[test]
fn test_auto_suggest() {
    let trie: Trie = ["hello", "hell", "heaven", "heavy"].into_iter().collect();

    assert_eq!(
        as_set(trie.auto_suggest("he")),
        set_of(&["hello", "hell", "heaven", "heavy"])
    );
    assert_eq!(as_set(trie.auto_suggest("hell")), set_of(&["hello", "hell"]));
    assert_eq!(trie.auto_suggest("hello"), vec!["hello"]);
    assert!(trie.auto_suggest("xyz").is_empty());
    assert!(trie.auto_suggest("helloo").is_empty());
}

#[test]
fn test_auto_suggest_is_ordered() {
    let trie: Trie = ["catatonic", "caterpillar", "catastrophe", "cat"]
        .into_iter()
        .collect();

    assert_eq!(
        trie.auto_suggest("cat"),
        vec!["cat", "catastrophe", "catatonic", "caterpillar"]
    );
}

#[test]
fn test_all_words_matches_empty_prefix() {
    let trie: Trie = ["b", "a", "ab", "ba"].into_iter().collect();
    assert_eq!(trie.all_words(), vec!["a", "ab", "b", "ba"]);
    assert_eq!(trie.all_words(), trie.auto_suggest(""));
}

#[test]
fn test_contains_prefix() {
    let mut trie: Trie = ["hello"].into_iter().collect();
    assert!(trie.contains_prefix(""));
    assert!(trie.contains_prefix("he"));
    assert!(trie.contains_prefix("hello"));
    assert!(!trie.contains_prefix("hex"));

    trie.delete("hello");
    assert!(!trie.contains_prefix("he"));
    assert!(!trie.contains_prefix(""));
}

#[test]
fn test_spelling_suggestions() {
    let trie: Trie = ["hello", "help"].into_iter().collect();

    let suggestions = trie.spelling_suggestions("helo").unwrap();
    assert_eq!(as_set(suggestions), set_of(&["hello", "help"]));

    let suggestions = trie.spelling_suggestions("haaaaa").unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_spelling_suggestions_ignore_other_first_letters() {
    // "jello" is one edit away from "hello" but starts with another letter
    let trie: Trie = ["jello", "hello"].into_iter().collect();
    assert_eq!(trie.spelling_suggestions("hello").unwrap(), vec!["hello"]);
}

#[test]
fn test_spelling_suggestions_missing_bucket() {
    let trie: Trie = ["hello", "help"].into_iter().collect();
    assert_eq!(trie.spelling_suggestions("xylophone"), Ok(Vec::new()));

    let empty = Trie::new();
    assert_eq!(empty.spelling_suggestions("hello"), Ok(Vec::new()));
}

#[test]
fn test_spelling_suggestions_empty_word() {
    let trie: Trie = ["hello"].into_iter().collect();
    assert_eq!(trie.spelling_suggestions(""), Err(TrieError::EmptyWord));
}

#[test]
fn test_spelling_suggestions_custom_distance() {
    let config = TrieConfig::new().with_max_edit_distance(0);
    let mut trie = Trie::with_config(config);
    trie.extend(["hello", "help"]);

    assert!(trie.spelling_suggestions("helo").unwrap().is_empty());
    assert_eq!(trie.spelling_suggestions("help").unwrap(), vec!["help"]);
    assert_eq!(trie.config().max_edit_distance, 0);
}

#[test]
fn test_clear() {
    let mut trie: Trie = ["a", "b", "c"].into_iter().collect();
    assert_eq!(trie.len(), 3);

    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
    assert!(trie.all_words().is_empty());
}

#[test]
fn test_render_tree() {
    let trie: Trie = ["he", "hat"].into_iter().collect();
    let rendered = trie.render_tree();

    assert_eq!(
        rendered.lines().collect::<Vec<_>>(),
        vec!["root", "└─ h", "   ├─ a", "   │  └─ t*", "   └─ e*"]
    );
    assert_eq!(rendered, format!("{trie}"));
}
