// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the dictionary trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children outright, so the structure is a strict tree and a subtree is freed
//! as soon as it is detached from its parent.
//!
//! Path depth equals word length, which is unbounded. Every walk over a
//! subtree, including drop, uses an explicit stack instead of recursion.

use std::collections::BTreeMap;
use std::fmt;

/// A node in the dictionary trie.
///
/// Each node represents one character on the path from the root. Terminal
/// nodes mark the end of a stored word.
#[derive(Default)]
pub struct TrieNode {
    /// The character this node represents (`None` for the root)
    pub character: Option<char>,

    /// Children keyed by their character, iterated in ascending order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node spells a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates the root node, which represents the empty prefix.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a new non-terminal node for `character`.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Returns the child for `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child for `c`, creating it when missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// A node can be detached from its parent once it carries no information.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of nodes in the subtree below this node (excluding itself).
    pub fn descendant_count(&self) -> usize {
        self.iter_subtree().count() - 1
    }

    /// Number of terminal nodes in this subtree (including itself).
    pub fn word_count(&self) -> usize {
        self.iter_subtree().filter(|node| node.is_terminal).count()
    }

    /// Iterates over this node and every node below it, in no particular order.
    fn iter_subtree(&self) -> impl Iterator<Item = &TrieNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants level by level so dropping a long chain never recurses.
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
