use thiserror::Error;

/// Errors produced by type construction and boundary parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("record id must be a positive integer, got {0}")]
    InvalidRecordId(i64),

    #[error("unknown mutable field: {0}")]
    UnknownField(String),

    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },
}
