// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix index.
//!
//! Results are checked against a plain `BTreeMap` model of the dictionary.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use crate::tests::{build_index, dictionary_strategy, word_strategy};

/// Expected totals per word.
fn model(entries: &[(String, u64)]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for (word, frequency) in entries {
        *totals.entry(word.clone()).or_insert(0) += frequency;
    }
    totals
}

/// Expected ranked completions: frequency descending, then word ascending.
fn ranked(totals: &BTreeMap<String, u64>, prefix: &str) -> Vec<String> {
    let mut words: Vec<(&String, &u64)> = totals
        .iter()
        .filter(|(word, _)| word.starts_with(prefix))
        .collect();
    words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    words.into_iter().map(|(word, _)| word.clone()).collect()
}

proptest! {
    // Property: repeated inserts of one word sum their frequencies
    #[test]
    fn prop_repeated_insert_accumulates(word in word_strategy(), f1 in 0u64..1000, f2 in 0u64..1000) {
        let index = build_index(&[(word.clone(), f1), (word.clone(), f2)]);

        prop_assert!(index.search(&word));
        prop_assert_eq!(index.frequency(&word), Some(f1 + f2));
        prop_assert_eq!(index.len(), 1);
        prop_assert_eq!(index.node_count(), word.chars().count() + 1);
    }

    // Property: search is true exactly for inserted words
    #[test]
    fn prop_search_matches_inserted_words(entries in dictionary_strategy(), probes in prop::collection::vec(word_strategy(), 0..20)) {
        let index = build_index(&entries);
        let inserted: HashSet<&String> = entries.iter().map(|(word, _)| word).collect();

        for word in &inserted {
            prop_assert!(index.search(word));
        }
        for probe in &probes {
            prop_assert_eq!(index.search(probe), inserted.contains(probe));
        }
    }

    // Property: the empty prefix returns every word once, in rank order
    #[test]
    fn prop_empty_prefix_returns_everything(entries in dictionary_strategy()) {
        let index = build_index(&entries);
        let totals = model(&entries);

        let results = index.autocomplete("");
        prop_assert_eq!(results.len(), totals.len());
        prop_assert_eq!(results, ranked(&totals, ""));
    }

    // Property: prefix results are exactly the matching subset, in rank order
    #[test]
    fn prop_prefix_results_match_model(entries in dictionary_strategy(), prefix in "[abcé]{0,3}") {
        let index = build_index(&entries);
        let totals = model(&entries);

        let results = index.autocomplete(&prefix);
        for word in &results {
            prop_assert!(word.starts_with(&prefix));
        }
        prop_assert_eq!(results, ranked(&totals, &prefix));
    }

    // Property: higher frequency always comes first within one result
    #[test]
    fn prop_ranking_is_monotonic(entries in dictionary_strategy(), prefix in "[abc]{0,2}") {
        let index = build_index(&entries);

        let suggestions = index.suggestions(&prefix);
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].frequency >= pair[1].frequency);
            if pair[0].frequency == pair[1].frequency {
                prop_assert!(pair[0].word < pair[1].word);
            }
        }
    }

    // Property: independent builds from the same inserts agree exactly
    #[test]
    fn prop_output_is_deterministic(entries in dictionary_strategy(), prefix in "[abc]{0,2}") {
        let first = build_index(&entries);
        let second = build_index(&entries);

        prop_assert_eq!(first.autocomplete(&prefix), second.autocomplete(&prefix));
    }
}

#[test]
fn test_ranking_examples() {
    let entries: Vec<(String, u64)> = [("cat", 5), ("car", 3), ("cart", 3), ("dog", 10)]
        .into_iter()
        .map(|(word, frequency)| (word.to_string(), frequency))
        .collect();
    let index = build_index(&entries);

    assert_eq!(index.autocomplete("ca"), vec!["cat", "car", "cart"]);
    assert_eq!(index.autocomplete("do"), vec!["dog"]);
    assert!(index.autocomplete("z").is_empty());
}
