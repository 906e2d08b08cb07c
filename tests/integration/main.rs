//! Integration suite entry point.

#[path = "../common/mod.rs"]
mod common;
mod order_store_tests;
mod search_scenarios;
