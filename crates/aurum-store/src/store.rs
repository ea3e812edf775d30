use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{History, StoreError};

/// Maximum number of records retained across persists.
pub const DEFAULT_CAPACITY: usize = 100;

/// Flat-file JSON store for the premium history.
///
/// The file holds the full serialized sequence; each persist rewrites
/// it, truncated to the newest `capacity` records. Each scheduled run
/// is expected to finish before the next starts, so the
/// load/upsert/persist cycle takes no file lock.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    capacity: usize,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Loads the stored history.
    ///
    /// A missing file is an empty history. Unreadable or corrupt
    /// content is also treated as empty: losing a day of history is
    /// cheaper than failing every subsequent run on the same bad file.
    pub fn load(&self) -> History {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return History::new(),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "history file unreadable, starting from empty history"
                );
                return History::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "history file corrupt, starting from empty history"
                );
                History::new()
            }
        }
    }

    /// Writes the full sequence, truncated to the newest `capacity`
    /// records (oldest evicted first). Failures surface to the caller.
    pub fn persist(&self, history: &History) -> Result<(), StoreError> {
        let mut bounded = history.clone();
        bounded.truncate_front(self.capacity);

        let payload = serde_json::to_string_pretty(&bounded).map_err(StoreError::Serialize)?;
        fs::write(&self.path, payload).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
