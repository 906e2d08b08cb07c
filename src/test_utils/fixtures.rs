use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use crate::core::NewOrder;
use crate::error::{Result, TrackError};
use crate::search::{RecordStore, SearchField, SearchRecord};
use crate::storage::Database;

/// Record with only `tray_type` set, status CUTTING.
pub fn record(id: i64, tray_type: &str) -> SearchRecord {
    SearchRecord {
        id,
        order_code: None,
        tray_type: Some(tray_type.to_string()),
        serial_no: None,
        make: None,
        dimensions: None,
        size: None,
        status: "CUTTING".to_string(),
    }
}

/// In-memory record store that counts calls and can be told to fail.
///
/// Substring matching mimics SQLite's default `LIKE`: `%literal%`
/// containment, ASCII case-insensitive.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<SearchRecord>,
    fail_substring: bool,
    fail_pool: bool,
    substring_calls: AtomicUsize,
    pool_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(records: Vec<SearchRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Store whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail_substring: true,
            fail_pool: true,
            ..Self::default()
        }
    }

    /// Make only the candidate pool scan fail.
    #[must_use]
    pub fn fail_pool(mut self) -> Self {
        self.fail_pool = true;
        self
    }

    pub fn substring_calls(&self) -> usize {
        self.substring_calls.load(Ordering::SeqCst)
    }

    pub fn pool_calls(&self) -> usize {
        self.pool_calls.load(Ordering::SeqCst)
    }
}

impl RecordStore for MemoryStore {
    fn find_by_substring(
        &self,
        pattern: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<SearchRecord>> {
        self.substring_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_substring {
            return Err(TrackError::Io(std::io::Error::other("substring scan refused")));
        }

        let needle = pattern.trim_matches('%').to_ascii_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|record| {
                fields.iter().any(|field| {
                    field
                        .value(record)
                        .to_ascii_lowercase()
                        .contains(needle.as_str())
                })
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch_candidate_pool(&self, limit: usize) -> Result<Vec<SearchRecord>> {
        self.pool_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pool {
            return Err(TrackError::Io(std::io::Error::other("pool scan refused")));
        }
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}

/// Temp-dir SQLite database for integration tests.
pub struct DbFixture {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
    pub db: Database,
}

impl DbFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("tt.db");
        let db = Database::open(&db_path)?;
        Ok(Self {
            temp_dir,
            db_path,
            db,
        })
    }

    /// Insert an order with the given tray type and maker.
    pub fn add(&self, tray_type: &str, make: Option<&str>) -> Result<i64> {
        let order = NewOrder {
            tray_type: Some(tray_type.to_string()),
            make: make.map(str::to_string),
            ..NewOrder::default()
        };
        Ok(self.db.create_order(&order)?.id)
    }
}
