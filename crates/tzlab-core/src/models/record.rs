//! Persisted timestamp record.

use serde::{Deserialize, Serialize};

use super::Instant;

/// A stored pair of timestamps.
///
/// `ts_value` and `dt_value` model the two column flavours relational stores
/// usually offer (an instant column and a wall-clock column). Here both hold
/// an absolute [`Instant`] so neither can be reinterpreted under a different
/// offset than the one used to write it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimestampRecord {
    /// Row identifier, `None` until the record has been saved
    pub id: Option<u64>,

    /// Instant column, stored as epoch milliseconds
    pub ts_value: Option<Instant>,

    /// Date-time column, stored as an RFC 3339 UTC timestamp
    pub dt_value: Option<Instant>,
}

impl TimestampRecord {
    /// A new unsaved record with both columns set to `instant`.
    pub fn with_both(instant: Instant) -> Self {
        Self {
            id: None,
            ts_value: Some(instant),
            dt_value: Some(instant),
        }
    }
}
