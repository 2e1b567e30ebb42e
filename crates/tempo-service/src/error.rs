use tempo_types::RecordId;

/// Errors surfaced across the record service boundary.
///
/// Storage detail never crosses this boundary: backend failures are logged
/// where they happen and surface as the opaque [`ServiceError::Storage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Structurally invalid caller input; never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No such record, or no version at or before the requested instant.
    #[error("record {0} does not exist")]
    NotFound(RecordId),

    /// Create on an id that already has history; never overwrites.
    #[error("record {0} already exists")]
    AlreadyExists(RecordId),

    /// Create payload contained no usable mutable fields.
    #[error("payload contains no mutable fields")]
    EmptyPayload,

    /// Opaque internal failure of the temporal store.
    #[error("internal storage error")]
    Storage,
}

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
