//! Append-only temporal version storage for tempo.
//!
//! A record's history is a timestamp-ordered sequence of immutable
//! versions. This crate defines the storage boundary and ships the
//! in-memory backend:
//!
//! - [`TemporalStore`] — trait implemented by every backend
//! - [`AppendRequest`] — compare-and-append write of one new version
//! - [`InMemoryTemporalStore`] — `HashMap`-based backend for tests and
//!   embedding
//!
//! # Design Rules
//!
//! 1. Versions are immutable once written; nothing is updated or deleted.
//! 2. Per record, `version_time` is strictly increasing. Ties are
//!    impossible by construction: the store bumps a non-increasing caller
//!    timestamp past the current latest.
//! 3. `append` is conditional on the caller's observed latest version, so
//!    two writers can never both merge against the same base and have both
//!    appends land.
//! 4. Appends are atomic: a version is fully visible or absent.
//! 5. Concurrent reads are always safe.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryTemporalStore;
pub use traits::{AppendRequest, TemporalStore};
