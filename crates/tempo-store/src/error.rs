use chrono::{DateTime, Utc};
use tempo_types::RecordId;

/// Errors from temporal store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Compare-and-append failed: the latest version changed after the
    /// caller observed it. Retry from a fresh read.
    #[error("version conflict for record {id}: expected latest {expected:?}, found {actual:?}")]
    VersionConflict {
        id: RecordId,
        expected: Option<DateTime<Utc>>,
        actual: Option<DateTime<Utc>>,
    },

    /// A lock guarding store state was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether a caller may retry the write from a fresh read.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::VersionConflict { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
