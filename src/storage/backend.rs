//! Key-value store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the persistence boundary of
//! the plugin. It deliberately mirrors a browser-style local storage: string keys
//! mapped to string values, with the caller responsible for encoding whatever it
//! stores. The record store keeps its whole collection as one JSON blob under a
//! single key, and the theme service keeps a single token under another.
//!
//! # Design Philosophy
//!
//! The trait is minimal and maps directly to the three operations the callers
//! need. Backends decide how and when data reaches durable storage.

use crate::domain::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Abstraction over string key-value persistence backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process memory only
///
/// # Examples
///
/// ```
/// use travel_authority::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?, Some("dark".to_string()));
/// # Ok::<(), travel_authority::TravelAuthorityError>(())
/// ```
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Shared handle to a key-value store.
///
/// The record store and the theme service both read and write the same backend.
/// The plugin runs single-threaded, so `Rc<RefCell<_>>` is sufficient.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wraps a concrete backend into a [`SharedStore`].
///
/// # Examples
///
/// ```
/// use travel_authority::storage::{shared, MemoryStore};
///
/// let store = shared(MemoryStore::default());
/// store.borrow_mut().set("k", "v")?;
/// # Ok::<(), travel_authority::TravelAuthorityError>(())
/// ```
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
