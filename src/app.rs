use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Result, TrackError};
use crate::storage::Database;

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub db: Arc<Database>,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = Self::find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let db = Database::open_with_timeout(
            config.storage.db_path(&root),
            Duration::from_millis(config.storage.busy_timeout_ms),
        )?;

        Ok(Self {
            root,
            config,
            db: Arc::new(db),
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("TT_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, ".tt") {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| TrackError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("traytrack"))
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}
