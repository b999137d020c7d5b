// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! This module provides a trie over a word/frequency dictionary with exact
//! lookups and frequency-ranked prefix completion.
//!
//! Ranking is frequency descending. Words with equal frequency are ordered
//! lexicographically ascending, so the output never depends on hash map
//! iteration order.
//!
//! The index itself is single-writer: [`PrefixIndex::insert`] takes
//! `&mut self`. Use [`SharedPrefixIndex`] to query from several threads
//! while another one loads.

mod error;
mod frequency;
mod node;
pub mod shared;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use error::PrefixIndexError;
use frequency::FrequencyTable;
use node::TrieNode;
pub use shared::SharedPrefixIndex;

/// Result type for prefix index operations
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;

/// A completion candidate together with its cumulative frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The complete word
    pub word: String,

    /// Sum of every frequency inserted for the word
    pub frequency: u64,
}

impl Suggestion {
    /// Ranking order: frequency descending, then word ascending.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Trie plus frequency table answering exact and ranked prefix queries.
///
/// Invariant: a word's final node is terminal if and only if the word has
/// an entry in the frequency table.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// Sentinel root, reached by no character
    root: TrieNode,

    /// Cumulative frequency per complete word
    frequencies: FrequencyTable,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, adding `frequency` to whatever it already had.
    ///
    /// Characters are compared by exact code point; callers normalise case
    /// before inserting. Inserting the same word again accumulates its
    /// frequency, and a frequency of 0 still registers the word.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. Must not be empty.
    /// * `frequency` - Usage weight added to the word's total.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word is present with its updated frequency.
    /// * `Err(PrefixIndexError::EmptyWord)` - If `word` is empty.
    pub fn insert<W>(&mut self, word: W, frequency: u64) -> PrefixIndexResult<()>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(PrefixIndexError::EmptyWord);
        }

        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));
        node.terminal = true;

        let total = self.frequencies.add(word, frequency);
        tracing::trace!(word, frequency, total, "Inserted word");

        Ok(())
    }

    /// Returns `true` if `word` was inserted as a complete word.
    ///
    /// Paths that only exist as the prefix of a longer word return `false`.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        !word.is_empty() && self.root.descend(word).is_some_and(|node| node.terminal)
    }

    /// Returns every word starting with `prefix`, best ranked first.
    ///
    /// An empty prefix returns the whole dictionary. A prefix with no
    /// matches returns an empty vector.
    pub fn autocomplete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.suggestions(prefix)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Same as [`autocomplete`](Self::autocomplete) but keeps each word's
    /// frequency alongside it.
    pub fn suggestions<P>(&self, prefix: P) -> Vec<Suggestion>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let Some(start) = self.root.descend(prefix) else {
            return Vec::new();
        };

        let mut results = self.collect_from(start, prefix);
        results.sort_unstable_by(Suggestion::rank);
        results
    }

    /// Walks the subtree under `start` depth-first with an explicit stack of
    /// child iterators, collecting every terminal word as `prefix + path`.
    fn collect_from(&self, start: &TrieNode, prefix: &str) -> Vec<Suggestion> {
        let mut results = Vec::new();
        let mut word = prefix.to_owned();
        self.push_terminal(start, &word, &mut results);

        // Every iterator above the first one corresponds to one char in `word`.
        let mut stack = vec![start.children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((c, child)) => {
                    word.push(*c);
                    self.push_terminal(child, &word, &mut results);
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        word.pop();
                    }
                }
            }
        }

        results
    }

    fn push_terminal(&self, node: &TrieNode, word: &str, results: &mut Vec<Suggestion>) {
        if !node.terminal {
            return;
        }
        match self.frequencies.get(word) {
            Some(frequency) => results.push(Suggestion {
                word: word.to_owned(),
                frequency,
            }),
            None => tracing::error!(word, "Terminal node without frequency entry"),
        }
    }

    /// Returns the cumulative frequency of an exact word.
    pub fn frequency<W>(&self, word: W) -> Option<u64>
    where
        W: AsRef<str>,
    {
        self.frequencies.get(word.as_ref())
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Checks if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Number of trie nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}
