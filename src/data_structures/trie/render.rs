// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Diagnostic tree rendering.
//!
//! Renders the trie as indented text, one node per line. The format is meant
//! for humans and may change:
//!
//! ```text
//! root
//! └─ h
//!    ├─ a
//!    │  └─ t*
//!    └─ e
//!       └─ y*
//! ```
//!
//! A `*` after a character marks a terminal node.

use std::fmt::{self, Write};

use super::node::TrieNode;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

/// Writes `root` and its subtree to `out`.
pub(crate) fn write_tree<W: Write>(root: &TrieNode, out: &mut W) -> fmt::Result {
    writeln!(out, "root")?;

    let mut indent = String::new();
    let mut stack = Vec::new();
    push_children(&mut stack, root, 0);

    while let Some(entry) = stack.pop() {
        indent.truncate(entry.indent);
        let marker = if entry.node.is_terminal { "*" } else { "" };
        writeln!(
            out,
            "{indent}{}{}{marker}",
            if entry.is_last { LAST_BRANCH } else { BRANCH },
            entry.character
        )?;

        indent.push_str(if entry.is_last { SPACE } else { PIPE });
        push_children(&mut stack, entry.node, indent.len());
    }
    Ok(())
}

/// A node waiting to be written.
struct Pending<'a> {
    character: char,
    node: &'a TrieNode,
    is_last: bool,
    /// Length of the indent owned by the parent
    indent: usize,
}

/// Pushes the children of `node` so they pop in ascending order.
fn push_children<'a>(stack: &mut Vec<Pending<'a>>, node: &'a TrieNode, indent: usize) {
    let count = node.children.len();
    stack.extend(
        node.children
            .iter()
            .enumerate()
            .rev()
            .map(|(i, (&character, child))| Pending {
                character,
                node: child,
                is_last: i + 1 == count,
                indent,
            }),
    );
}
