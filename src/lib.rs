//! Wordrank Library
//!
//! Frequency-ranked prefix completion over a word list. The core is
//! [`data_structures::PrefixIndex`]; the other modules load dictionaries,
//! read configuration and drive the console.
//!
//! # Example
//!
//! ```
//! use wordrank_lib::data_structures::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("cat", 5).unwrap();
//! index.insert("car", 3).unwrap();
//! index.insert("cart", 3).unwrap();
//!
//! assert_eq!(index.autocomplete("ca"), vec!["cat", "car", "cart"]);
//! assert!(index.search("car"));
//! assert!(!index.search("ca"));
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod repl;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for wordrank.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
