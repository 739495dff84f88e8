//! Display wrappers for timestamp records.

use std::fmt;

use jiff::tz::TimeZone;

use super::ZonedDateTime;
use crate::models::{Instant, TimestampRecord};

/// A single record rendered as markdown with local times in `zone`.
///
/// Each value shows the zoned wall-clock time followed by the raw epoch
/// milliseconds, so two records that share a wall-clock time during a DST
/// overlap are still distinguishable.
pub struct RecordView<'a> {
    pub record: &'a TimestampRecord,
    pub zone: &'a TimeZone,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a TimestampRecord, zone: &'a TimeZone) -> Self {
        Self { record, zone }
    }

    fn write_value(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        value: Option<&Instant>,
    ) -> fmt::Result {
        match value {
            Some(instant) => writeln!(
                f,
                "- **{label}**: {} ({} ms)",
                ZonedDateTime::new(instant, self.zone),
                instant.as_millis()
            ),
            None => writeln!(f, "- **{label}**: null"),
        }
    }
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record.id {
            Some(id) => writeln!(f, "### Record {id}")?,
            None => writeln!(f, "### Unsaved record")?,
        }
        writeln!(f)?;
        self.write_value(f, "ts_value", self.record.ts_value.as_ref())?;
        self.write_value(f, "dt_value", self.record.dt_value.as_ref())
    }
}

/// A list of records, or a placeholder when empty.
pub struct Records<'a> {
    pub records: &'a [TimestampRecord],
    pub zone: &'a TimeZone,
}

impl<'a> Records<'a> {
    pub fn new(records: &'a [TimestampRecord], zone: &'a TimeZone) -> Self {
        Self { records, zone }
    }
}

impl fmt::Display for Records<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No records found.");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", RecordView::new(record, self.zone))?;
        }
        Ok(())
    }
}

/// Confirmation shown after a record has been saved.
pub struct SavedRecord<'a>(pub RecordView<'a>);

impl fmt::Display for SavedRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.0.record.id {
            writeln!(f, "Saved record with ID: {id}")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.0)
    }
}
