//! Hybrid order search
//!
//! Combines two strategies over the record store:
//! - a substring (LIKE) query across the order's text columns
//! - a Levenshtein pass over a bounded candidate pool
//!
//! Fuzzy hits take priority when both strategies find the same order, and
//! every fuzzy hit ranks above every substring-only hit.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::SearchConfig;
use crate::error::{Result, TrackError};

pub mod fuzzy;
pub mod hybrid;
pub mod levenshtein;
pub mod substring;

pub use hybrid::merge_results;
pub use levenshtein::distance;

/// Searchable view of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    pub order_code: Option<String>,
    pub tray_type: Option<String>,
    pub serial_no: Option<String>,
    pub make: Option<String>,
    pub dimensions: Option<String>,
    pub size: Option<String>,
    pub status: String,
}

/// Text columns the substring stage may match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    OrderCode,
    TrayType,
    SerialNo,
    Make,
    Dimensions,
    Size,
}

impl SearchField {
    /// Columns matched by the substring stage, in query order.
    pub const SUBSTRING: [Self; 6] = [
        Self::OrderCode,
        Self::TrayType,
        Self::SerialNo,
        Self::Make,
        Self::Dimensions,
        Self::Size,
    ];

    /// Columns compared by the fuzzy stage.
    pub const FUZZY: [Self; 4] = [Self::TrayType, Self::Make, Self::Dimensions, Self::Size];

    pub const fn column(self) -> &'static str {
        match self {
            Self::OrderCode => "order_code",
            Self::TrayType => "tray_type",
            Self::SerialNo => "serial_no",
            Self::Make => "make",
            Self::Dimensions => "dimensions",
            Self::Size => "size",
        }
    }

    /// Field value on a record; missing values read as empty.
    pub fn value(self, record: &SearchRecord) -> &str {
        let value = match self {
            Self::OrderCode => &record.order_code,
            Self::TrayType => &record.tray_type,
            Self::SerialNo => &record.serial_no,
            Self::Make => &record.make,
            Self::Dimensions => &record.dimensions,
            Self::Size => &record.size,
        };
        value.as_deref().unwrap_or("")
    }
}

/// Which strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Exact,
    Fuzzy,
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub record: SearchRecord,
    pub source: MatchSource,
    /// `1 / (1 + distance)` for fuzzy hits; `None` for substring-only hits.
    pub score: Option<f64>,
}

impl SearchResult {
    pub const fn exact(record: SearchRecord) -> Self {
        Self {
            record,
            source: MatchSource::Exact,
            score: None,
        }
    }

    pub fn fuzzy(record: SearchRecord, distance: usize) -> Self {
        Self {
            record,
            source: MatchSource::Fuzzy,
            score: Some(fuzzy::score(distance)),
        }
    }

    pub const fn id(&self) -> i64 {
        self.record.id
    }

    /// Score used for ordering; absent counts as zero.
    pub fn rank_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Read operations the search engine needs from storage.
pub trait RecordStore {
    /// Records where any of `fields` matches the LIKE `pattern`.
    fn find_by_substring(
        &self,
        pattern: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<SearchRecord>>;

    /// Up to `limit` records with no filter applied.
    fn fetch_candidate_pool(&self, limit: usize) -> Result<Vec<SearchRecord>>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn find_by_substring(
        &self,
        pattern: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<SearchRecord>> {
        (**self).find_by_substring(pattern, fields, limit)
    }

    fn fetch_candidate_pool(&self, limit: usize) -> Result<Vec<SearchRecord>> {
        (**self).fetch_candidate_pool(limit)
    }
}

/// Stateless hybrid search over a record store.
pub struct SearchEngine<S> {
    store: S,
    config: SearchConfig,
}

impl<S: RecordStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub const fn with_config(store: S, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run both stages and return the merged, ranked results.
    ///
    /// A blank query returns no results without touching the store. Any
    /// store failure fails the whole search with `SearchUnavailable`.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }

        let exact = self.substring_stage(query).map_err(unavailable)?;

        let fuzzy = if query.chars().count() <= self.config.max_fuzzy_query_len {
            self.fuzzy_stage(query).map_err(unavailable)?
        } else {
            debug!(
                query_len = query.chars().count(),
                "query too long for fuzzy stage"
            );
            vec![]
        };

        let results = merge_results(fuzzy, exact, self.config.result_cap);
        debug!(count = results.len(), "search complete");
        Ok(results)
    }

    fn substring_stage(&self, query: &str) -> Result<Vec<SearchResult>> {
        let pattern = substring::like_pattern(query);
        let records = self.store.find_by_substring(
            &pattern,
            &SearchField::SUBSTRING,
            self.config.result_cap,
        )?;
        debug!(stage = "substring", hits = records.len());

        Ok(records
            .into_iter()
            .take(self.config.result_cap)
            .map(SearchResult::exact)
            .collect())
    }

    fn fuzzy_stage(&self, query: &str) -> Result<Vec<SearchResult>> {
        let candidates = self.store.fetch_candidate_pool(self.config.candidate_pool)?;
        let pool = candidates.len();
        let hits = fuzzy::rank(
            query,
            candidates,
            self.config.max_distance,
            self.config.result_cap,
        );
        debug!(stage = "fuzzy", pool, hits = hits.len());
        Ok(hits)
    }
}

fn unavailable(err: TrackError) -> TrackError {
    error!(error = %err, "record store call failed");
    TrackError::SearchUnavailable
}
