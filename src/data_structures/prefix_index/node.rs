// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! Each node stands for one character position in the trie. Children are
//! owned by value, so the whole tree is dropped with its root.

use std::collections::HashMap;

/// A node in the prefix index trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes
    pub children: HashMap<char, TrieNode>,

    /// Whether a complete dictionary word ends at this node
    pub terminal: bool,
}

impl TrieNode {
    /// Creates a new node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `c`, creating it if missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Follows `path` from this node, returning the node it ends on.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    /// Counts this node and all of its descendants.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Flattens the teardown so very deep tries cannot overflow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
