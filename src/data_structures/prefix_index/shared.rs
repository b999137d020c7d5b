// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shareable handle over a [`PrefixIndex`].
//!
//! Writers take the exclusive side of a `parking_lot::RwLock`, queries take
//! the shared side. Queries may overlap each other but never an insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{PrefixIndex, PrefixIndexResult, Suggestion};

/// Cloneable handle to a prefix index guarded by a reader/writer lock.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<RwLock<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Creates a handle over a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already populated index.
    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Inserts a word under the write lock. See [`PrefixIndex::insert`].
    pub fn insert<W>(&self, word: W, frequency: u64) -> PrefixIndexResult<()>
    where
        W: AsRef<str>,
    {
        self.inner.write().insert(word, frequency)
    }

    /// Runs several inserts under a single write lock acquisition.
    pub fn write_with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut PrefixIndex) -> T,
    {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// See [`PrefixIndex::search`].
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().search(word)
    }

    /// See [`PrefixIndex::autocomplete`].
    pub fn autocomplete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.inner.read().autocomplete(prefix)
    }

    /// See [`PrefixIndex::suggestions`].
    pub fn suggestions<P>(&self, prefix: P) -> Vec<Suggestion>
    where
        P: AsRef<str>,
    {
        self.inner.read().suggestions(prefix)
    }

    /// See [`PrefixIndex::frequency`].
    pub fn frequency<W>(&self, word: W) -> Option<u64>
    where
        W: AsRef<str>,
    {
        self.inner.read().frequency(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<PrefixIndex> for SharedPrefixIndex {
    fn from(index: PrefixIndex) -> Self {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    /// Readers race a loader; every snapshot they see must already be ranked.
    #[test]
    fn test_concurrent_readers_and_writer() {
        const READERS: usize = 4;
        const WORDS: u64 = 200;

        let index = SharedPrefixIndex::new();
        let barrier = Arc::new(Barrier::new(READERS + 1));

        let writer = {
            let index = index.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..WORDS {
                    index.insert(format!("word{i:03}"), i % 7).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let index = index.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..50 {
                        let results = index.suggestions("word");
                        for pair in results.windows(2) {
                            assert!(pair[0].frequency >= pair[1].frequency);
                            if pair[0].frequency == pair[1].frequency {
                                assert!(pair[0].word < pair[1].word);
                            }
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(index.len(), WORDS as usize);
        assert!(index.search("word199"));
    }

    #[test]
    fn test_write_with_batches_inserts() {
        let index = SharedPrefixIndex::new();
        let inserted = index.write_with(|inner| {
            ["cat", "car", "dog"]
                .iter()
                .filter(|word| inner.insert(word, 1).is_ok())
                .count()
        });

        assert_eq!(inserted, 3);
        assert_eq!(index.autocomplete("ca"), vec!["car", "cat"]);
        assert_eq!(index.frequency("dog"), Some(1));
    }

    #[test]
    fn test_from_populated_index() {
        let mut inner = PrefixIndex::new();
        inner.insert("cat", 5).unwrap();
        let index = SharedPrefixIndex::from(inner);

        assert!(!index.is_empty());
        assert!(index.insert("", 1).is_err());
        assert_eq!(index.autocomplete(""), vec!["cat"]);
    }
}
