//! Integration tests for loading dictionaries from disk.

use std::fs;

use wordrank_lib::config::DictionaryConfig;
use wordrank_lib::data_structures::PrefixIndex;
use wordrank_lib::dictionary::{DictionaryLoader, LoadReport};
use wordrank_lib::error::dictionary::DictionaryError;

#[test]
fn test_load_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "Cat 5\r\ncar 3\ncart 3\nnot a line\ndog 10\n").unwrap();

    let mut index = PrefixIndex::new();
    let report = DictionaryLoader::from_config(&DictionaryConfig::default())
        .load_path(&path, &mut index)
        .unwrap();

    assert_eq!(report, LoadReport { inserted: 4, skipped: 1 });
    assert_eq!(index.autocomplete("ca"), vec!["cat", "car", "cart"]);
    assert_eq!(index.autocomplete("do"), vec!["dog"]);
}

#[test]
fn test_invalid_frequency_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "cat 5\ndog ten\n").unwrap();

    let mut index = PrefixIndex::new();
    let err = DictionaryLoader::new().load_path(&path, &mut index).unwrap_err();

    match err {
        DictionaryError::InvalidFrequency { line, value, .. } => {
            assert_eq!(line, 2);
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_case_preserved_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "Rust 3\nrust 1\n").unwrap();

    let config = DictionaryConfig {
        path: path.clone(),
        lowercase: false,
    };
    let mut index = PrefixIndex::new();
    DictionaryLoader::from_config(&config)
        .load_path(&config.path, &mut index)
        .unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.autocomplete("R"), vec!["Rust"]);
}
