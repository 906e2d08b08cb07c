use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a complete config from TOML text, filling gaps with defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| TrackError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("traytrack/config.toml"))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| TrackError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| TrackError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_usize("TT_SEARCH_RESULT_CAP")? {
            self.search.result_cap = value;
        }
        if let Some(value) = env_usize("TT_SEARCH_CANDIDATE_POOL")? {
            self.search.candidate_pool = value;
        }
        if let Some(value) = env_usize("TT_SEARCH_MAX_FUZZY_QUERY_LEN")? {
            self.search.max_fuzzy_query_len = value;
        }
        if let Some(value) = env_usize("TT_SEARCH_MAX_DISTANCE")? {
            self.search.max_distance = value;
        }

        if let Some(value) = env_string("TT_STORAGE_DB_FILE") {
            self.storage.db_file = value;
        }
        if let Some(value) = env_u64("TT_STORAGE_BUSY_TIMEOUT_MS")? {
            self.storage.busy_timeout_ms = value;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.result_cap == 0 {
            return Err(TrackError::Config(
                "search.result_cap must be greater than 0".to_string(),
            ));
        }
        if self.search.candidate_pool == 0 {
            return Err(TrackError::Config(
                "search.candidate_pool must be greater than 0".to_string(),
            ));
        }
        if self.storage.db_file.trim().is_empty() {
            return Err(TrackError::Config(
                "storage.db_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tunables for the hybrid search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on each stage and on the merged output.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
    /// Rows scanned by the fuzzy stage.
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,
    /// Longest query (in characters) that still gets a fuzzy pass.
    #[serde(default = "default_max_fuzzy_query_len")]
    pub max_fuzzy_query_len: usize,
    /// Largest edit distance a fuzzy hit may have.
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
}

const fn default_result_cap() -> usize {
    50
}

const fn default_candidate_pool() -> usize {
    200
}

const fn default_max_fuzzy_query_len() -> usize {
    40
}

const fn default_max_distance() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
            candidate_pool: default_candidate_pool(),
            max_fuzzy_query_len: default_max_fuzzy_query_len(),
            max_distance: default_max_distance(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.result_cap {
            self.result_cap = value;
        }
        if let Some(value) = patch.candidate_pool {
            self.candidate_pool = value;
        }
        if let Some(value) = patch.max_fuzzy_query_len {
            self.max_fuzzy_query_len = value;
        }
        if let Some(value) = patch.max_distance {
            self.max_distance = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_file: String,
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: "tt.db".to_string(),
            busy_timeout_ms: 5000,
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.db_file {
            self.db_file = value;
        }
        if let Some(value) = patch.busy_timeout_ms {
            self.busy_timeout_ms = value;
        }
    }

    /// Database path; relative names resolve against the data root.
    pub fn db_path(&self, root: &Path) -> PathBuf {
        let path = PathBuf::from(&self.db_file);
        if path.is_absolute() {
            path
        } else {
            root.join(path)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub search: Option<SearchPatch>,
    pub storage: Option<StoragePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub result_cap: Option<usize>,
    pub candidate_pool: Option<usize>,
    pub max_fuzzy_query_len: Option<usize>,
    pub max_distance: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub db_file: Option<String>,
    pub busy_timeout_ms: Option<u64>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            TrackError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            TrackError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
