//! Session configuration and defaults.
//!
//! # Responsibility
//! - Hold the knobs a front end may override (storage location, log setup,
//!   notice lifetime).
//! - Resolve platform data directories for the default database location.

use crate::logging::default_log_level;
use std::path::PathBuf;
use std::time::Duration;

/// Slot name the list snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "list";
/// How long a notice stays visible.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(1500);

const APP_DIR_NAME: &str = "listkeep";
const DB_FILE_NAME: &str = "listkeep.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Where list data lives for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// SQLite database file.
    File(PathBuf),
    /// Nothing survives the session.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage: StorageLocation,
    pub storage_key: String,
    pub notice_ttl: Duration,
    pub log_level: String,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let data_dir = app_data_dir();
        Self {
            storage: StorageLocation::File(data_dir.join(DB_FILE_NAME)),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notice_ttl: DEFAULT_NOTICE_TTL,
            log_level: default_log_level().to_string(),
            log_dir: Some(data_dir.join(LOG_DIR_NAME)),
        }
    }
}

/// Per-user application data directory.
///
/// Falls back to the home directory, then to the working directory, when the
/// platform exposes no data dir.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
        .join(APP_DIR_NAME)
}
