//! In-memory temporal store for tests, local demos, and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use tempo_types::{RecordId, Version};

use crate::error::{StoreError, StoreResult};
use crate::traits::{AppendRequest, TemporalStore};

/// In-memory, `HashMap`-based temporal store.
///
/// Per record, versions live in a vec ordered ascending by `version_time`;
/// the write lock makes the conflict check and the push one atomic step.
/// Data is lost when the store is dropped.
pub struct InMemoryTemporalStore {
    records: RwLock<HashMap<RecordId, Vec<Version>>>,
}

impl InMemoryTemporalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records with at least one version.
    pub fn record_count(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Total number of versions across all records.
    pub fn version_count(&self) -> usize {
        self.records
            .read()
            .expect("lock poisoned")
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Returns `true` if no version has ever been written.
    pub fn is_empty(&self) -> bool {
        self.version_count() == 0
    }

    /// Remove all records and versions.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryTemporalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalStore for InMemoryTemporalStore {
    fn exists_any(&self, id: RecordId) -> StoreResult<bool> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).is_some_and(|versions| !versions.is_empty()))
    }

    fn latest(&self, id: RecordId) -> StoreResult<Option<Version>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).and_then(|versions| versions.last()).cloned())
    }

    fn as_of(&self, id: RecordId, at: DateTime<Utc>) -> StoreResult<Option<Version>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).and_then(|versions| {
            // Versions are ascending, so the answer is the last one at or
            // before `at`.
            let idx = versions.partition_point(|v| v.version_time <= at);
            if idx == 0 {
                None
            } else {
                Some(versions[idx - 1].clone())
            }
        }))
    }

    fn history(&self, id: RecordId) -> StoreResult<Vec<Version>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records
            .get(&id)
            .map(|versions| versions.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    fn append(&self, request: AppendRequest) -> StoreResult<Version> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;

        let actual = records
            .get(&request.id)
            .and_then(|versions| versions.last())
            .map(|v| v.version_time);
        if actual != request.expected_latest {
            return Err(StoreError::VersionConflict {
                id: request.id,
                expected: request.expected_latest,
                actual,
            });
        }

        let mut version_time = request.at;
        if let Some(latest) = actual {
            if version_time <= latest {
                // Clock skew or a same-instant writer: move past the latest
                // version instead of failing the write.
                version_time = latest + TimeDelta::microseconds(1);
                warn!(
                    id = %request.id,
                    caller_time = %request.at,
                    bumped_to = %version_time,
                    "non-increasing version time; bumped past latest"
                );
            }
        }

        let version = Version {
            id: request.id,
            created_at: request.created_at,
            version_time,
            fields: request.fields,
        };
        records.entry(request.id).or_default().push(version.clone());
        debug!(id = %request.id, version_time = %version.version_time, "appended version");
        Ok(version)
    }
}

impl std::fmt::Debug for InMemoryTemporalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTemporalStore")
            .field("record_count", &self.record_count())
            .field("version_count", &self.version_count())
            .finish()
    }
}
