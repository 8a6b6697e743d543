//! Record store: the authoritative collection of travel records.
//!
//! [`RecordStore`] owns every [`TravelRecord`] of the running session. Records
//! live in an insertion-ordered arena (`Vec`) with an identifier → position index
//! beside it, so lookups by [`RecordId`] never depend on how or where the records
//! are currently rendered.
//!
//! # Variants
//!
//! - **Durable** ([`RecordStore::persistent`]): every mutation re-serializes the
//!   whole collection as a JSON array under [`RECORDS_KEY`] in the shared
//!   key-value store.
//! - **Transient** ([`RecordStore::transient`]): records exist for the session
//!   only.
//!
//! # Failure Semantics
//!
//! Persistence failures never reach the caller. A blob that cannot be decoded
//! loads as an empty collection and a failed write leaves the in-memory
//! collection authoritative. Both are logged at `warn` level.

use crate::domain::{RecordId, TravelRecord};
use crate::storage::backend::SharedStore;
use std::collections::HashMap;
use std::fmt;

/// Key under which the serialized record collection is stored.
pub const RECORDS_KEY: &str = "travel_records";

/// Insertion-ordered, identifier-indexed collection of travel records.
///
/// # Examples
///
/// ```
/// use travel_authority::domain::{RecordFields, TravelRecord};
/// use travel_authority::storage::{shared, MemoryStore, RecordStore};
///
/// let backend = shared(MemoryStore::default());
/// let mut store = RecordStore::persistent(backend.clone());
///
/// let record = TravelRecord::create(RecordFields {
///     name: "Jane Doe".to_string(),
///     ..Default::default()
/// });
/// store.upsert(record.clone());
///
/// let mut reopened = RecordStore::persistent(backend);
/// assert_eq!(reopened.load(), &[record]);
/// ```
pub struct RecordStore {
    /// Records in insertion order.
    records: Vec<TravelRecord>,

    /// Position of each record in `records`.
    index: HashMap<RecordId, usize>,

    /// Persistence backend, `None` for the transient variant.
    backend: Option<SharedStore>,
}

impl RecordStore {
    /// Opens a durable store and loads whatever is persisted in `backend`.
    #[must_use]
    pub fn persistent(backend: SharedStore) -> Self {
        let mut store = Self {
            records: Vec::new(),
            index: HashMap::new(),
            backend: Some(backend),
        };
        store.load();
        store
    }

    /// Creates an empty store without durability.
    #[must_use]
    pub fn transient() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            backend: None,
        }
    }

    /// Returns `true` if mutations are written to a backend.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.backend.is_some()
    }

    /// Re-reads the collection from the backend and returns it.
    ///
    /// Absent or malformed data yields an empty collection. For the transient
    /// variant this returns the in-memory collection unchanged.
    pub fn load(&mut self) -> &[TravelRecord] {
        let Some(backend) = &self.backend else {
            return &self.records;
        };

        let _span = tracing::debug_span!("record_store_load").entered();

        let raw = match backend.borrow().get(RECORDS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read records, using empty collection");
                None
            }
        };

        let decoded = raw.map_or_else(Vec::new, |blob| {
            serde_json::from_str::<Vec<TravelRecord>>(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored records are malformed, using empty collection");
                Vec::new()
            })
        });

        self.records.clear();
        self.index.clear();
        for record in decoded {
            if self.index.contains_key(&record.id) {
                tracing::warn!(record_id = %record.id, "dropping duplicate stored record");
                continue;
            }
            self.index.insert(record.id.clone(), self.records.len());
            self.records.push(record);
        }

        tracing::debug!(record_count = self.records.len(), "records loaded");
        &self.records
    }

    /// Returns the current collection in insertion order.
    #[must_use]
    pub fn records(&self) -> &[TravelRecord] {
        &self.records
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&TravelRecord> {
        self.index.get(id).and_then(|&pos| self.records.get(pos))
    }

    /// Returns `true` if a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, or replaces all attributes of the record with the same
    /// identifier in place. Persists in the durable variant.
    pub fn upsert(&mut self, record: TravelRecord) {
        let _span = tracing::debug_span!("record_store_upsert", record_id = %record.id).entered();

        if let Some(&pos) = self.index.get(&record.id) {
            tracing::debug!("replacing existing record");
            self.records[pos].fields = record.fields;
        } else {
            tracing::debug!("appending new record");
            self.index.insert(record.id.clone(), self.records.len());
            self.records.push(record);
        }

        self.persist();
    }

    /// Removes the record with `id`. Absent identifiers are a no-op.
    ///
    /// Returns `true` if a record was removed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let _span = tracing::debug_span!("record_store_remove", record_id = %id).entered();

        let Some(pos) = self.index.remove(id) else {
            tracing::debug!("record not found, nothing to remove");
            return false;
        };

        self.records.remove(pos);
        for (offset, record) in self.records[pos..].iter().enumerate() {
            self.index.insert(record.id.clone(), pos + offset);
        }

        self.persist();
        true
    }

    /// Writes the whole collection to the backend, if any.
    fn persist(&self) {
        let Some(backend) = &self.backend else {
            return;
        };

        let blob = match serde_json::to_string(&self.records) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode records");
                return;
            }
        };

        if let Err(e) = backend.borrow_mut().set(RECORDS_KEY, &blob) {
            tracing::warn!(error = %e, "failed to persist records");
        }
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("durable", &self.is_durable())
            .finish()
    }
}
