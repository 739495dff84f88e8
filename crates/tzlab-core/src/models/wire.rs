//! Seconds + nanoseconds wire representation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Instant;
use crate::error::{ConversionError, Result};

const NANOS_PER_SECOND: i32 = 1_000_000_000;
const NANOS_PER_MILLI: i32 = 1_000_000;

/// A transport timestamp: whole seconds since the epoch plus a non-negative
/// nanosecond remainder.
///
/// Mirrors the shape of `google.protobuf.Timestamp`, so the JSON form is
/// `{"seconds":1661238000,"nanos":0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWireTimestamp")]
pub struct WireTimestamp {
    seconds: i64,
    nanos: i32,
}

#[derive(Deserialize)]
struct RawWireTimestamp {
    seconds: i64,
    #[serde(default)]
    nanos: i32,
}

impl TryFrom<RawWireTimestamp> for WireTimestamp {
    type Error = ConversionError;

    fn try_from(raw: RawWireTimestamp) -> Result<Self> {
        WireTimestamp::new(raw.seconds, raw.nanos)
    }
}

impl WireTimestamp {
    /// Creates a wire timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::OutOfRange` when `nanos` is not within
    /// `0..1_000_000_000` or `seconds` is outside the supported range.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self> {
        if !(0..NANOS_PER_SECOND).contains(&nanos) {
            return Err(ConversionError::out_of_range("wire timestamp nanos", nanos));
        }
        if !(Timestamp::MIN.as_second()..=Timestamp::MAX.as_second()).contains(&seconds) {
            return Err(ConversionError::out_of_range(
                "wire timestamp seconds",
                seconds,
            ));
        }
        Ok(Self { seconds, nanos })
    }

    /// Whole seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond remainder, always in `0..1_000_000_000`.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl From<Instant> for WireTimestamp {
    /// `seconds = floor(millis / 1000)`, `nanos = (millis mod 1000) * 10^6`.
    ///
    /// Euclidean division keeps `nanos` non-negative for instants before the
    /// epoch: -1 ms becomes `{seconds: -1, nanos: 999_000_000}`.
    fn from(instant: Instant) -> Self {
        let millis = instant.as_millis();
        Self {
            seconds: millis.div_euclid(1000),
            // rem_euclid(1000) is in 0..1000, so the product fits in i32
            nanos: millis.rem_euclid(1000) as i32 * NANOS_PER_MILLI,
        }
    }
}

impl TryFrom<WireTimestamp> for Instant {
    type Error = ConversionError;

    /// `millis = seconds * 1000 + nanos / 10^6`; sub-millisecond nanos are
    /// discarded.
    fn try_from(ts: WireTimestamp) -> Result<Self> {
        let millis = ts
            .seconds
            .checked_mul(1000)
            .and_then(|ms| ms.checked_add(i64::from(ts.nanos / NANOS_PER_MILLI)))
            .ok_or_else(|| ConversionError::out_of_range("wire timestamp seconds", ts.seconds))?;
        Instant::from_millis(millis)
    }
}
