//! Test modules for wordrank.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error conversion and reporting
//! - Property-based tests for the prefix index using proptest
//! - Shared fixtures and strategies

pub mod prefix_index_tests;

pub use test_utils::{build_index, dictionary_strategy, word_strategy, TestFixture};
