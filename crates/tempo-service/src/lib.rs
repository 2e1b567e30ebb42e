//! Record service orchestration for tempo.
//!
//! This is the public contract a transport layer consumes. It wires the
//! payload sanitizer and merge engine onto a [`TemporalStore`] to implement
//! create, update, latest/as-of reads, version listing, and upsert, with the
//! optimistic compare-and-append discipline that prevents lost updates.
//!
//! The store is an injected dependency, never process-wide state; swap in
//! any [`TemporalStore`] implementation.

pub mod error;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::{parse_timestamp, RecordService};

// Re-export the types a caller needs to use the service.
pub use tempo_store::{InMemoryTemporalStore, TemporalStore};
pub use tempo_types::{FieldSet, RecordId, Version};
