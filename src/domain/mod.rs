//! Domain layer for the Travel Authority plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific APIs
//! or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Travel record model and identifiers
//!
//! # Examples
//!
//! ```
//! use travel_authority::domain::{RecordFields, TravelRecord};
//!
//! let record = TravelRecord::create(RecordFields {
//!     name: "Jane Doe".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(record.fields.name, "Jane Doe");
//! ```

pub mod error;
pub mod record;

pub use error::{Result, TravelAuthorityError};
pub use record::{RecordFields, RecordId, TravelRecord};
