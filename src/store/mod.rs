//! Best-effort local persistence for history and settings.
//!
//! Both records are JSON files in the platform data directory
//! (e.g. ~/.local/share/cringein/). Missing or corrupt files load as
//! defaults; nothing here is allowed to fail an analysis.

mod history;
mod settings;

pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use settings::{Settings, Theme};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const HISTORY_FILE: &str = "history.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("reading or writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key-value store rooted at one directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store in the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "cringein").ok_or(StoreError::NoDataDir)?;
        Ok(Self::at(dirs.data_dir()))
    }

    /// Store rooted at an explicit directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_history(&self) -> History {
        self.read_or_default(HISTORY_FILE)
    }

    pub fn save_history(&self, history: &History) -> Result<(), StoreError> {
        self.write(HISTORY_FILE, history)
    }

    pub fn load_settings(&self) -> Settings {
        self.read_or_default(SETTINGS_FILE)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write(SETTINGS_FILE, settings)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable store file, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt store file, using defaults");
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }
}
