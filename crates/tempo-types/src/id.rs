use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identity of a logical record.
///
/// Ids arrive at the boundary as signed integers; construction rejects zero
/// and negative values, so every `RecordId` in the system is positive. The
/// id never changes across the versions of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Validate a raw boundary id.
    pub fn new(raw: i64) -> Result<Self, TypeError> {
        if raw <= 0 {
            return Err(TypeError::InvalidRecordId(raw));
        }
        Ok(Self(raw as u64))
    }

    /// The numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
