use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, error};

use tempo_merge::{merge, sanitize, SanitizeMode};
use tempo_store::{AppendRequest, StoreError, TemporalStore};
use tempo_types::{FieldSet, RecordId, Version};

use crate::error::{ServiceError, ServiceResult};

/// Bounded retry budget for the read-merge-append loop under write
/// conflicts. Exhaustion escalates to the opaque storage error.
const MAX_APPEND_RETRIES: usize = 5;

/// Parse an RFC3339 as-of parameter from the boundary.
pub fn parse_timestamp(input: &str) -> ServiceResult<DateTime<Utc>> {
    tempo_types::parse_timestamp(input).map_err(|e| ServiceError::InvalidArgument(e.to_string()))
}

/// Orchestrates sanitation, merging, and temporal storage into the public
/// record operations.
///
/// Generic over the storage backend; the store is injected at construction
/// and shared by reference, so two services over the same store see the
/// same records.
pub struct RecordService<S: TemporalStore> {
    store: Arc<S>,
}

impl<S: TemporalStore> RecordService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current state of a record.
    pub fn get(&self, id: i64) -> ServiceResult<Version> {
        let id = validate_id(id)?;
        self.latest_or_not_found(id)
    }

    /// State of a record as it was at `at`. A record created later did not
    /// exist at `at` and reads as not found.
    pub fn get_at(&self, id: i64, at: DateTime<Utc>) -> ServiceResult<Version> {
        let id = validate_id(id)?;
        self.store
            .as_of(id, at)
            .map_err(storage_error)?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Every version of a record, newest first.
    pub fn list_versions(&self, id: i64) -> ServiceResult<Vec<Version>> {
        let id = validate_id(id)?;
        let history = self.store.history(id).map_err(storage_error)?;
        if history.is_empty() {
            return Err(ServiceError::NotFound(id));
        }
        Ok(history)
    }

    /// Write the first version of a new record.
    ///
    /// Fails if the id already has history (never overwrites) or if the
    /// sanitized payload is empty (a record cannot exist with zero
    /// attributes).
    pub fn create(&self, id: i64, payload: &Map<String, Value>) -> ServiceResult<Version> {
        let id = validate_id(id)?;
        debug!(%id, "create record");

        if self.store.exists_any(id).map_err(storage_error)? {
            return Err(ServiceError::AlreadyExists(id));
        }

        let safe = sanitize(payload, SanitizeMode::DropAbsentAndNull);
        if safe.is_empty() {
            return Err(ServiceError::EmptyPayload);
        }

        let now = Utc::now();
        let request = AppendRequest {
            id,
            fields: merge(&FieldSet::zeroed(), &safe),
            at: now,
            created_at: now,
            expected_latest: None,
        };
        match self.store.append(request) {
            Ok(_) => self.latest_or_not_found(id),
            // A concurrent create slipped in between the existence check
            // and the append.
            Err(StoreError::VersionConflict { .. }) => Err(ServiceError::AlreadyExists(id)),
            Err(e) => Err(storage_error(e)),
        }
    }

    /// Append a new version with the payload's fields overwriting the
    /// previous state and everything else carried forward.
    ///
    /// Uses `PreserveNull` sanitation, so an explicit null clears a field;
    /// omitting it keeps the prior value. A payload with nothing usable is
    /// an idempotent no-op that writes no version.
    pub fn update(&self, id: i64, payload: &Map<String, Value>) -> ServiceResult<Version> {
        let id = validate_id(id)?;
        debug!(%id, "update record");

        let safe = sanitize(payload, SanitizeMode::PreserveNull);

        for attempt in 0..MAX_APPEND_RETRIES {
            let prev = self.latest_or_not_found(id)?;
            if safe.is_empty() {
                debug!(%id, "update with no recognized fields; no-op");
                return Ok(prev);
            }

            let request = AppendRequest {
                id,
                fields: merge(&prev.fields, &safe),
                at: Utc::now(),
                created_at: prev.created_at,
                expected_latest: Some(prev.version_time),
            };
            match self.store.append(request) {
                Ok(_) => return self.latest_or_not_found(id),
                Err(e @ StoreError::VersionConflict { .. }) => {
                    debug!(%id, attempt, error = %e, "append conflicted; retrying from fresh read");
                    continue;
                }
                Err(e) => return Err(storage_error(e)),
            }
        }

        error!(%id, retries = MAX_APPEND_RETRIES, "update retries exhausted");
        Err(ServiceError::Storage)
    }

    /// Create-or-update: the POST semantics of a typical boundary.
    pub fn save(&self, id: i64, payload: &Map<String, Value>) -> ServiceResult<Version> {
        let record_id = validate_id(id)?;
        if self.store.exists_any(record_id).map_err(storage_error)? {
            return self.update(id, payload);
        }
        match self.create(id, payload) {
            // Lost a create race; the record exists now, so update it.
            Err(ServiceError::AlreadyExists(_)) => self.update(id, payload),
            other => other,
        }
    }

    fn latest_or_not_found(&self, id: RecordId) -> ServiceResult<Version> {
        self.store
            .latest(id)
            .map_err(storage_error)?
            .ok_or(ServiceError::NotFound(id))
    }
}

fn validate_id(raw: i64) -> ServiceResult<RecordId> {
    RecordId::new(raw).map_err(|e| ServiceError::InvalidArgument(e.to_string()))
}

fn storage_error(err: StoreError) -> ServiceError {
    // Full detail stays in the log; the caller gets an opaque error.
    error!(error = %err, "temporal store failure");
    ServiceError::Storage
}
