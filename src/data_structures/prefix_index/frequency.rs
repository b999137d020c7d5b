// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Cumulative word frequencies.

use std::collections::HashMap;

/// Maps complete words to the sum of every frequency inserted for them.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `frequency` to the entry for `word` and returns the new total.
    ///
    /// Totals saturate at `u64::MAX`.
    pub fn add(&mut self, word: &str, frequency: u64) -> u64 {
        match self.counts.get_mut(word) {
            Some(total) => {
                *total = total.saturating_add(frequency);
                *total
            }
            None => {
                self.counts.insert(word.to_owned(), frequency);
                frequency
            }
        }
    }

    /// Returns the cumulative frequency of `word`, if it was ever added.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word has been added.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
