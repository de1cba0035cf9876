//! Integration tests for the fortress_parser crate.
//!
//! Tests for the command pipeline:
//! - Normalization
//! - Lexicon lookup
//! - Slot filling

mod lexicon_tests;
mod normalizer_tests;
