use chrono::{DateTime, Utc};
use tempo_types::{FieldSet, RecordId, Version};

use crate::error::StoreResult;

/// A compare-and-append write of one new version.
#[derive(Clone, Debug)]
pub struct AppendRequest {
    pub id: RecordId,
    /// Fully-materialized attribute set for the new version.
    pub fields: FieldSet,
    /// Caller-observed wall-clock time. The store may move it forward to
    /// keep `version_time` strictly increasing for the record.
    pub at: DateTime<Utc>,
    /// First-version timestamp, carried unchanged across the record's
    /// history.
    pub created_at: DateTime<Utc>,
    /// `version_time` of the latest version the caller observed, or `None`
    /// if it observed an empty history. The append fails with
    /// [`crate::StoreError::VersionConflict`] if the store disagrees, which
    /// makes an append against `None` an atomic insert-if-absent.
    pub expected_latest: Option<DateTime<Utc>>,
}

/// Append-only, timestamp-ordered version storage.
///
/// All implementations must satisfy these invariants:
/// - Versions are immutable once written; no update, no delete.
/// - Per record, `version_time` is strictly increasing; no two versions of
///   one record share a timestamp.
/// - `append` is atomic and conditional on `expected_latest`.
/// - Concurrent reads are always safe.
/// - All I/O errors are propagated, never silently ignored.
pub trait TemporalStore: Send + Sync {
    /// Whether at least one version has ever been written for `id`.
    fn exists_any(&self, id: RecordId) -> StoreResult<bool>;

    /// The version with the greatest `version_time`, or `None` if the
    /// record has no history.
    fn latest(&self, id: RecordId) -> StoreResult<Option<Version>>;

    /// The version with the greatest `version_time` at or before `at`, or
    /// `None` if no version qualifies. A record that only came into
    /// existence after `at` did not exist at `at`.
    fn as_of(&self, id: RecordId, at: DateTime<Utc>) -> StoreResult<Option<Version>>;

    /// Every version ever written for `id`, descending by `version_time`.
    /// An unknown id yields an empty vec, not an error.
    fn history(&self, id: RecordId) -> StoreResult<Vec<Version>>;

    /// Write one new immutable version and return it as stored (its
    /// `version_time` may have been bumped past the caller's `at`).
    fn append(&self, request: AppendRequest) -> StoreResult<Version>;
}
