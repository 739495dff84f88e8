//! JSON mapping for timestamp records.
//!
//! A [`JsonMapper`] owns its zone and pattern, so serialized output never
//! depends on the process-wide default time zone. With the defaults (zone
//! `UTC`, [`ISO_OFFSET_PATTERN`]) a record serializes as:
//!
//! ```json
//! {"id":null,"tsValue":"2022-08-23T07:00:00.000+00:00","dtValue":null}
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    convert::{TimestampConverter, ISO_OFFSET_PATTERN},
    error::Result,
    models::{Instant, TimeZoneId, TimestampRecord},
};

/// Wire document for a record. Field order is the output key order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocument {
    id: Option<u64>,
    #[serde(default)]
    ts_value: Option<String>,
    #[serde(default)]
    dt_value: Option<String>,
}

/// Serializes and deserializes [`TimestampRecord`]s with a fixed zone.
#[derive(Debug, Clone)]
pub struct JsonMapper {
    converter: TimestampConverter,
}

impl JsonMapper {
    /// A mapper rendering timestamps in `zone` with [`ISO_OFFSET_PATTERN`].
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnknownZone` if `zone` does not resolve.
    pub fn new(zone: impl Into<TimeZoneId>) -> Result<Self> {
        Self::with_pattern(zone, ISO_OFFSET_PATTERN)
    }

    /// A mapper rendering timestamps in UTC, e.g. `2022-08-23T07:00:00.000+00:00`.
    pub fn utc() -> Result<Self> {
        Self::new(TimeZoneId::utc())
    }

    /// A mapper with a custom pattern.
    pub fn with_pattern(zone: impl Into<TimeZoneId>, pattern: &str) -> Result<Self> {
        let converter = TimestampConverter::builder()
            .zone(zone)
            .pattern(pattern)
            .build()?;
        Ok(Self { converter })
    }

    /// Serializes a record to a compact JSON string.
    pub fn to_json(&self, record: &TimestampRecord) -> Result<String> {
        Ok(serde_json::to_string(&self.document(record))?)
    }

    /// Serializes a record to indented JSON.
    pub fn to_json_pretty(&self, record: &TimestampRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document(record))?)
    }

    /// Parses a record. Timestamps carrying an offset ignore the mapper's zone.
    pub fn from_json(&self, json: &str) -> Result<TimestampRecord> {
        let document: RecordDocument = serde_json::from_str(json)?;
        Ok(TimestampRecord {
            id: document.id,
            ts_value: self.read(document.ts_value.as_deref())?,
            dt_value: self.read(document.dt_value.as_deref())?,
        })
    }

    fn document(&self, record: &TimestampRecord) -> RecordDocument {
        RecordDocument {
            id: record.id,
            ts_value: record.ts_value.map(|i| self.converter.format(i)),
            dt_value: record.dt_value.map(|i| self.converter.format(i)),
        }
    }

    fn read(&self, text: Option<&str>) -> Result<Option<Instant>> {
        text.map(|t| self.converter.parse(t)).transpose()
    }
}
