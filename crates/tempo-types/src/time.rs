use chrono::{DateTime, Utc};

use crate::error::TypeError;

/// Parse an RFC3339 timestamp from the boundary.
///
/// Used for as-of query parameters; anything chrono cannot parse is an
/// invalid argument, never a guess.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TypeError> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TypeError::InvalidTimestamp {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
