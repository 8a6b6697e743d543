//! Error types for the Travel Authority plugin.
//!
//! This module defines the centralized error type [`TravelAuthorityError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Most of these errors never reach the user: the record store and theme service log
//! persistence failures and carry on with an empty or unchanged collection.

use thiserror::Error;

/// The main error type for Travel Authority operations.
///
/// # Examples
///
/// ```
/// use travel_authority::TravelAuthorityError;
///
/// fn read_store() -> Result<(), TravelAuthorityError> {
///     Err(TravelAuthorityError::Storage("failed to read file".to_string()))
/// }
///
/// assert!(read_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TravelAuthorityError {
    /// Key-value store operation failed.
    ///
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted value could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Travel Authority operations.
pub type Result<T> = std::result::Result<T, TravelAuthorityError>;
