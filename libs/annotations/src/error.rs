//! Error types for reservation persistence.

use thiserror::Error;

/// Errors that can occur when persisting the reservation set.
///
/// Decode failures are not represented here: a malformed annotation
/// is treated as an empty reservation set on read, never surfaced.
#[derive(Debug, Error, Clone)]
pub enum AnnotationError {
    /// The reservation set could not be serialized.
    #[error("failed to encode reserved slots: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for AnnotationError {
    fn from(err: serde_json::Error) -> Self {
        AnnotationError::Encode(err.to_string())
    }
}
