//! Travel record domain model.
//!
//! A [`TravelRecord`] is one travel-authority entry: who travels, where, why and
//! when. Records are identified by a [`RecordId`] that is generated once on
//! creation and never reused, so identity survives every re-render of the table.
//!
//! The six user-editable attributes are grouped in [`RecordFields`] so that the
//! form, validation and the store can pass them around without an identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a travel record.
///
/// Generated from a random UUID v4, which makes identifiers unique within a
/// session and across restarts without any counter to persist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_authority::RecordId;
    ///
    /// let a = RecordId::generate();
    /// let b = RecordId::generate();
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six editable attributes of a travel record.
///
/// Dates are free-form strings; no ordering between departure and return is
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub rank: String,
    pub destination: String,
    pub purpose: String,
    pub departure: String,
    #[serde(rename = "return")]
    pub return_date: String,
}

impl RecordFields {
    /// Returns the attribute values in table column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.name,
            &self.rank,
            &self.destination,
            &self.purpose,
            &self.departure,
            &self.return_date,
        ]
    }
}

/// A single travel-authority entry.
///
/// Serialized flat, so a stored record looks like:
///
/// ```json
/// {"id":"…","name":"Jane Doe","rank":"Capt","destination":"Manila",
///  "purpose":"Training","departure":"2024-01-10","return":"2024-01-15"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl TravelRecord {
    /// Creates a record with a freshly generated identifier.
    #[must_use]
    pub fn create(fields: RecordFields) -> Self {
        Self {
            id: RecordId::generate(),
            fields,
        }
    }

    /// Creates a record with a known identifier, used for updates.
    #[must_use]
    pub const fn with_id(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> RecordFields {
        RecordFields {
            name: "Jane Doe".to_string(),
            rank: "Capt".to_string(),
            destination: "Manila".to_string(),
            purpose: "Training".to_string(),
            departure: "2024-01-10".to_string(),
            return_date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn serializes_flat_with_return_key() {
        let record = TravelRecord::with_id(RecordId::from("abc"), sample_fields());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], "abc");
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["return"], "2024-01-15");
        assert!(value.get("fields").is_none());
        assert!(value.get("return_date").is_none());
    }

    #[test]
    fn deserializes_stored_shape() {
        let json = r#"{"id":"r1","name":"A","rank":"B","destination":"C","purpose":"D","departure":"E","return":"F"}"#;
        let record: TravelRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_str(), "r1");
        assert_eq!(record.fields.cells(), ["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn created_records_get_distinct_ids() {
        let a = TravelRecord::create(sample_fields());
        let b = TravelRecord::create(sample_fields());
        assert_ne!(a.id, b.id);
        assert_eq!(a.fields, b.fields);
    }
}
