//! Error types for ordinal allocation.

use thiserror::Error;

/// Result type for allocator operations.
pub type OrdinalResult<T> = Result<T, OrdinalError>;

/// Errors that can occur during ordinal allocation.
///
/// The allocator is total over well-formed inputs; the only failure
/// mode is a caller contract violation, detected before any work is
/// done.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrdinalError {
    /// The caller supplied a negative replica count.
    #[error("replica count cannot be negative: {0}")]
    NegativeReplicas(i32),
}
