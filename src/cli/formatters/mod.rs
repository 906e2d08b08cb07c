//! Output formatters for command results

pub mod search_results;
