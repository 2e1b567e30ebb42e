use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::FieldSet;
use crate::id::RecordId;

/// One immutable snapshot of a record's full attribute set.
///
/// A record's history is an append-only sequence of versions ordered by
/// `version_time`; `(id, version_time)` identifies a version. `created_at`
/// is stamped by the first version and carried unchanged by every later one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub version_time: DateTime<Utc>,
    pub fields: FieldSet,
}

impl Version {
    /// Shorthand for a single attribute value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
