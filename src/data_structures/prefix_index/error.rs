// Copyright (c) 2025 Wordrank Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix index.
//!
//! Only caller mistakes are errors here. Lookups that find nothing return
//! empty values instead.

/// Errors that can occur in prefix index operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixIndexError {
    /// Error when an empty word is inserted.
    #[error("Empty word not allowed")]
    EmptyWord,
}
