//! Property suite entry point.

mod engine_tests;
mod levenshtein_tests;
