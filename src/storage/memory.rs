//! In-memory key-value backend.
//!
//! Holds entries for the lifetime of the process only. Used when the data
//! directory cannot be opened and by tests.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Volatile key-value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates a store pre-populated with `entries`.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_authority::storage::{KeyValueStore, MemoryStore};
    ///
    /// let store = MemoryStore::with_entries([("theme", "light")]);
    /// assert_eq!(store.get("theme")?, Some("light".to_string()));
    /// # Ok::<(), travel_authority::TravelAuthorityError>(())
    /// ```
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
