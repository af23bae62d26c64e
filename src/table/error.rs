//! Transition table error types.

use thiserror::Error;

/// Errors that can occur while exporting or importing a transition table
#[derive(Debug, Error)]
pub enum TableError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
