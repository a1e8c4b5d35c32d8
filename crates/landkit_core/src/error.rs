//! Error types for landkit core operations.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors produced by the content store and its collaborators.
///
/// Malformed *stored* data is deliberately not represented here: the load
/// path recovers it to defaults and logs, per the persistence contract.
/// These errors cover the write path and the typed edit boundary.
#[derive(Debug, Error)]
pub enum LandkitError {
    /// The storage backend failed to read or write a key.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A document or brand list could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A string did not name one of the five known sections.
    #[error("unknown section `{0}`")]
    UnknownSection(String),

    /// An edit named a field the target section does not declare.
    #[error("unknown field `{field}` for section `{section}`")]
    UnknownField {
        /// The section the edit targeted.
        section: String,
        /// The rejected field name.
        field: String,
    },

    /// An edit carried a value of the wrong shape for its declared field type.
    #[error("invalid value for `{section}.{field}`: expected {expected}")]
    FieldType {
        /// The section the edit targeted.
        section: String,
        /// The field whose type was violated.
        field: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// A section override was not a JSON object.
    #[error("override for section `{section}` must be a JSON object")]
    SectionShape {
        /// The section whose override was malformed.
        section: String,
    },

    /// A publish delivery strategy failed to hand off its announcement.
    #[error("publish delivery error: {0}")]
    Delivery(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LandkitError>;
