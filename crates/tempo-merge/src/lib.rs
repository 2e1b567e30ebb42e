//! Payload sanitation and version merging for tempo.
//!
//! Two pure stages sit between an untrusted boundary payload and a stored
//! version:
//!
//! - [`sanitize`] filters an arbitrary JSON object down to the mutable
//!   fields declared in the schema table. It is a filter, not a validator:
//!   unknown keys are silently dropped and an empty result is a meaningful
//!   answer ("nothing to change").
//! - [`merge`] applies a sanitized partial update to a previous full state,
//!   producing the next fully-materialized state. Keys absent from the
//!   partial carry forward unchanged; an explicit null clears a field to its
//!   zero value.
//!
//! Neither stage performs I/O or needs synchronization.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tempo_types::{field_def, FieldSet, MUTABLE_FIELDS};

/// How the sanitizer treats explicit nulls in the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SanitizeMode {
    /// A key survives only if present and non-null. Used for create, where
    /// null carries no meaning.
    DropAbsentAndNull,
    /// A key survives whenever present, null included. Used for update,
    /// where an explicit null means "clear this field" and is distinct from
    /// omitting the key.
    PreserveNull,
}

/// Restrict an untrusted payload to the mutable-field schema.
pub fn sanitize(raw: &Map<String, Value>, mode: SanitizeMode) -> BTreeMap<String, Value> {
    let mut safe = BTreeMap::new();
    for def in &MUTABLE_FIELDS {
        let Some(value) = raw.get(def.name) else {
            continue;
        };
        if value.is_null() && mode == SanitizeMode::DropAbsentAndNull {
            continue;
        }
        safe.insert(def.name.to_string(), value.clone());
    }
    safe
}

/// Apply a sanitized partial update to a previous full state.
///
/// Every key present in `partial` overwrites; everything else carries
/// forward from `prev`. The result is always fully materialized, so any
/// single version can answer an as-of read without replaying older ones.
pub fn merge(prev: &FieldSet, partial: &BTreeMap<String, Value>) -> FieldSet {
    let mut next = prev.clone();
    for (name, value) in partial {
        // Sanitized input only contains schema keys; anything else is
        // dropped here for the same reason the sanitizer drops it.
        if let Some(def) = field_def(name) {
            next.set(def, value.clone());
        }
    }
    next
}
