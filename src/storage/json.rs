//! JSON file-based key-value backend.
//!
//! This module provides a simple, human-readable store using JSON serialization.
//! It uses atomic file writes (write-to-temp + rename) to prevent corruption on
//! crashes. The whole map is kept in memory and written back on every change.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "theme": "dark",
//!     "travel_records": "[{\"id\":\"…\",\"name\":\"Jane Doe\",…}]"
//!   }
//! }
//! ```

use crate::domain::error::{Result, TravelAuthorityError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    /// Version of the file format for future migrations.
    version: u32,

    /// All stored entries, kept sorted for stable diffs.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value backend.
///
/// # Corruption Handling
///
/// A store file that cannot be parsed is treated as empty. It is left on disk
/// untouched until the next successful write replaces it.
///
/// # Thread Safety
///
/// Designed for the single-threaded plugin runtime. Wrap it with
/// [`shared`](crate::storage::shared) to hand it to several components.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file contents.
    data: StoreFile,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a JSON store at `file_path`.
    ///
    /// Parent directories are created automatically. A missing file starts an
    /// empty store; a malformed file is logged and also starts an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use travel_authority::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/store.json"))?;
    /// # Ok::<(), travel_authority::TravelAuthorityError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreFile::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads store data from a JSON file, substituting an empty store for
    /// malformed content.
    fn load_from_file(path: &Path) -> Result<StoreFile> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StoreFile>(&contents) {
            Ok(data) => {
                tracing::debug!(
                    version = data.version,
                    entries = data.entries.len(),
                    "loaded store data"
                );
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "store file is malformed, starting empty");
                Ok(StoreFile::default())
            }
        }
    }

    /// Saves store data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path so
    /// the file is never left half-written.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TravelAuthorityError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, value_len = value.len()).entered();

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
