//! Storage layer for persistent records and preferences.
//!
//! This module provides the persistence adapter (a string key-value store) and the
//! record store built on top of it.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait and the shared handle type
//! - `json`: JSON file backend with atomic writes
//! - `memory`: volatile in-memory backend
//! - `records`: the authoritative travel record collection

pub mod backend;
pub mod json;
pub mod memory;
pub mod records;

pub use backend::{shared, KeyValueStore, SharedStore};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{RecordStore, RECORDS_KEY};
