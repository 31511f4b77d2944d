//! # StoreError
//!
//! Centralized error handling for the Clipshelf persistence core.
//! Maps storage-level failures to actionable error types.
//!
//! Not-found is deliberately absent: removing a missing record is a no-op
//! and upsert falls back to insert. Corrupt stored JSON is absorbed on the
//! read path (the collection reads as empty) because there is no remote
//! source of truth to recover from.

use thiserror::Error;

/// The primary error type for all repository and adapter operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing store inaccessible or over quota. The calling page's
    /// in-memory state is left unchanged; surfaced as a transient notice.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Uniqueness violation on upsert (admin email, community name).
    /// Never a silent overwrite; the caller must re-prompt.
    #[error("duplicate {field}: {value}")]
    DuplicateKey { field: &'static str, value: String },

    /// Invariant violation (e.g. removing or demoting the lead admin).
    #[error("validation error: {0}")]
    Validation(String),

    /// Encode failure on the write path.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A specialized Result type for Clipshelf logic.
pub type Result<T> = std::result::Result<T, StoreError>;
