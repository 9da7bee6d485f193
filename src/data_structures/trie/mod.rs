// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary Trie Implementation
//!
//! A prefix tree that stores a set of words and answers membership,
//! prefix-completion and "did you mean" queries.
//!
//! # Example
//!
//! ```
//! use trie_dictionary_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(trie.insert("hello"));
//! assert!(trie.insert("help"));
//! assert!(!trie.insert("hello"));
//!
//! assert!(trie.search("help"));
//! assert_eq!(trie.auto_suggest("hel"), vec!["hello", "help"]);
//! assert_eq!(trie.spelling_suggestions("helo").unwrap(), vec!["hello", "help"]);
//!
//! assert!(trie.delete("help"));
//! assert!(!trie.search("help"));
//! ```
//!
//! # Spelling suggestions
//!
//! Candidates are drawn only from words sharing the query's first character,
//! then filtered by Levenshtein distance. A word that differs in its first
//! letter is never suggested, even when it is otherwise close.

mod error;
mod levenshtein;
mod node;
mod render;

#[cfg(test)]
mod tests;

use std::fmt;

pub use error::{TrieError, TrieResult};
pub use levenshtein::levenshtein_distance;
pub use node::TrieNode;

/// Default edit-distance threshold for spelling suggestions.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Configuration options for the dictionary trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Largest Levenshtein distance at which a stored word is suggested
    pub max_edit_distance: usize,
}

impl TrieConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    /// Set the edit-distance threshold used by [`Trie::spelling_suggestions`].
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A prefix tree holding a set of words.
///
/// Key features:
/// * O(word length) search, insert and delete
/// * Prefix enumeration in ascending character order
/// * Spelling suggestions bounded by edit distance
/// * Nodes are pruned as soon as they no longer lead to a word
///
/// The empty string is an ordinary word: inserting it marks the root as
/// terminal.
///
/// No operation recurses over the tree, so words of any length are safe.
pub struct Trie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Checks whether `word` is stored as a complete word.
    ///
    /// A stored word's strict prefix is not itself a match unless it was
    /// inserted separately.
    pub fn search<K>(&self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(|node| node.is_terminal)
    }

    /// Checks whether any stored word starts with `prefix`.
    pub fn contains_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        // Pruning guarantees every reachable node leads to a word.
        self.find_node(prefix.as_ref())
            .is_some_and(|node| node.is_terminal || !node.children.is_empty())
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created, so at most `word.len()`
    /// nodes are allocated.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was added, `false` if it was already present (in
    /// which case nothing changes).
    pub fn insert<K>(&mut self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in word.as_ref().chars() {
            node = node.child_or_insert(c);
        }

        if node.is_terminal {
            return false;
        }
        node.is_terminal = true;
        true
    }

    /// Removes a word from the trie.
    ///
    /// After the word is unmarked, every node on its path that is neither
    /// terminal nor has children is detached, from the bottom up. Nodes
    /// still shared with other words are left in place.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and has been removed, `false` if it
    /// was not stored (including when it is only a prefix of stored words).
    pub fn delete<K>(&mut self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        let chars: Vec<char> = word.as_ref().chars().collect();

        // Depth of the deepest node on the path that survives the removal:
        // the root, or an ancestor that is a word itself or branches elsewhere.
        let mut keep_depth = 0;
        let mut node = &self.root;
        for (depth, c) in chars.iter().enumerate() {
            if node.is_terminal || node.children.len() > 1 {
                keep_depth = depth;
            }
            match node.child(*c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.is_terminal {
            return false;
        }
        let prune = node.children.is_empty();

        let Some(keeper) = Self::descend_mut(&mut self.root, &chars[..keep_depth]) else {
            return false;
        };

        if prune {
            if let Some(c) = chars.get(keep_depth) {
                // Everything below `keeper` on this path leads only to `word`.
                keeper.children.remove(c);
                tracing::trace!(
                    character = %c,
                    depth = keep_depth,
                    pruned = chars.len() - keep_depth,
                    "pruned trie branch"
                );
                return true;
            }
        }

        match Self::descend_mut(keeper, &chars[keep_depth..]) {
            Some(target) => {
                target.is_terminal = false;
                true
            }
            None => false,
        }
    }

    /// Lists every stored word that starts with `prefix`.
    ///
    /// Words are returned in ascending character order. An unknown prefix
    /// yields an empty list.
    pub fn auto_suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut words = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, prefix, &mut words);
        }
        words
    }

    /// Lists every stored word. Equivalent to `auto_suggest("")`.
    pub fn all_words(&self) -> Vec<String> {
        self.auto_suggest("")
    }

    /// Suggests stored words close to `word`.
    ///
    /// Only words that start with the same character as `word` are
    /// considered; of those, every word within
    /// [`TrieConfig::max_edit_distance`] is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The matching words, possibly empty. No stored
    ///   word sharing the first character is not an error.
    /// * `Err(TrieError::EmptyWord)` - If `word` is empty.
    pub fn spelling_suggestions<K>(&self, word: K) -> TrieResult<Vec<String>>
    where
        K: AsRef<str>,
    {
        let word = word.as_ref();
        let first = word.chars().next().ok_or(TrieError::EmptyWord)?;

        let Some(bucket) = self.root.child(first) else {
            tracing::debug!(%word, "no stored word shares the first character");
            return Ok(Vec::new());
        };

        let mut candidates = Vec::new();
        Self::collect_words(bucket, &first.to_string(), &mut candidates);
        let candidate_count = candidates.len();

        let max_distance = self.config.max_edit_distance;
        let suggestions: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| levenshtein_distance(word, candidate) <= max_distance)
            .collect();

        tracing::debug!(
            %word,
            candidates = candidate_count,
            suggestions = suggestions.len(),
            max_distance,
            "computed spelling suggestions"
        );

        Ok(suggestions)
    }

    /// Returns the number of words in the trie.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.word_count()
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Removes every word, dropping the whole tree.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }

    /// Renders the tree structure as indented text, for debugging.
    pub fn render_tree(&self) -> String {
        self.to_string()
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    fn descend_mut<'a>(node: &'a mut TrieNode, path: &[char]) -> Option<&'a mut TrieNode> {
        path.iter()
            .try_fold(node, |node, c| node.children.get_mut(c))
    }

    /// Pre-order walk below `start`, whose path spells `prefix`, appending
    /// every word met in ascending order.
    fn collect_words(start: &TrieNode, prefix: &str, words: &mut Vec<String>) {
        let mut buffer = prefix.to_string();

        // (edge character, node, buffer length of the parent's path)
        let mut stack: Vec<(Option<char>, &TrieNode, usize)> = vec![(None, start, buffer.len())];
        while let Some((c, node, len)) = stack.pop() {
            buffer.truncate(len);
            if let Some(c) = c {
                buffer.push(c);
            }
            if node.is_terminal {
                words.push(buffer.clone());
            }

            let len = buffer.len();
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(&c, child)| (Some(c), child, len)),
            );
        }
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("config", &self.config)
            .field("words", &self.len())
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_tree(&self.root, f)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
