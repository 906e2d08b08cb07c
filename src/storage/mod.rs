//! Storage layer for traytrack
//!
//! SQLite holds the order table and serves the search engine's reads.

pub mod migrations;
pub mod sqlite;

pub use sqlite::{Database, OrderListing, OrderRecord};
