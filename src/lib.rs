//! traytrack - tray cutting order tracker
//!
//! Orders live in SQLite; `search` ranks them with a substring query merged
//! with a Levenshtein pass over a bounded candidate pool.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod search;
pub mod storage;
pub mod test_utils;

pub use error::{Result, TrackError};
pub use search::{MatchSource, RecordStore, SearchEngine, SearchRecord, SearchResult};
