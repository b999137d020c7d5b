//! Data structures for wordrank.
//!
//! This module contains the index that backs ranked completion. It performs
//! no I/O; loading and presentation live in the collaborator modules.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{
    PrefixIndex, PrefixIndexError, PrefixIndexResult, SharedPrefixIndex, Suggestion,
};
