//! Persistence behind a load/save interface
//!
//! Game code never touches files directly; it goes through a `Store`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading or saving persisted state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value style persistence for one value
pub trait Store<T> {
    /// Load the stored value, or the default if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if stored data exists but cannot be read.
    fn load(&self) -> Result<T, StoreError>;

    /// Replace the stored value
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be written.
    fn save(&self, value: &T) -> Result<(), StoreError>;
}

/// Pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/wordle-game/<file_name>`, falling back to the current directory
    #[must_use]
    pub fn default_path(file_name: &str) -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("wordle-game").join(file_name)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned + Default> Store<T> for JsonFileStore {
    fn load(&self) -> Result<T, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved state, using defaults");
            return Ok(T::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral play
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    value: RefCell<Option<T>>,
}

impl<T> MemoryStore<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }
}

impl<T: Clone + Default> Store<T> for MemoryStore<T> {
    fn load(&self) -> Result<T, StoreError> {
        Ok(self.value.borrow().clone().unwrap_or_default())
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, GameResult};
    use crate::stats::Statistics;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("statistics.json"));

        let stats: Statistics = store.load().unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("statistics.json"));

        let mut stats = Statistics::new();
        stats.record(GameMode::Random, GameResult::Win);
        store.save(&stats).unwrap();

        assert!(store.path().exists());
        let reloaded: Statistics = store.load().unwrap();
        assert_eq!(reloaded, stats);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statistics.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let result: Result<Statistics, _> = store.load();
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let path = JsonFileStore::default_path("statistics.json");
        assert!(path.ends_with("wordle-game/statistics.json"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        let mut stats: Statistics = store.load().unwrap();
        stats.record(GameMode::Custom, GameResult::Lose);
        store.save(&stats).unwrap();

        let reloaded: Statistics = store.load().unwrap();
        assert_eq!(reloaded.tally(GameMode::Custom).lose, 1);
    }
}
