//! Millisecond-granular absolute instants.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

const MILLIS_PER_SECOND: i64 = 1_000;
const NANOS_PER_MILLI: i32 = 1_000_000;

/// An absolute point in time with millisecond precision.
///
/// No time zone is attached. Two instants are equal exactly when their epoch
/// millisecond counts are equal, regardless of how they were produced.
///
/// Serializes as an integer count of milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Instant(Timestamp);

impl Instant {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Instant = Instant(Timestamp::UNIX_EPOCH);

    /// The earliest supported instant, -9999-01-02T01:59:59Z.
    pub const MIN: Instant = Instant(Timestamp::MIN);

    /// Creates an instant from milliseconds since the Unix epoch.
    ///
    /// Every millisecond from [`Instant::MIN`] through
    /// 9999-12-30T22:00:00.999Z is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::OutOfRange` if the value lies outside the
    /// supported calendar range.
    pub fn from_millis(millis: i64) -> Result<Self> {
        let seconds = millis.div_euclid(MILLIS_PER_SECOND);
        // rem_euclid keeps this in 0..1000, so the product fits in i32
        let nanos = millis.rem_euclid(MILLIS_PER_SECOND) as i32 * NANOS_PER_MILLI;
        Timestamp::new(seconds, nanos)
            .map(Instant)
            .map_err(|_| ConversionError::out_of_range("instant millis", millis))
    }

    /// The current time, truncated to millisecond precision.
    pub fn now() -> Result<Self> {
        Self::truncate(Timestamp::now())
    }

    /// The latest supported instant, 9999-12-30T22:00:00.999Z.
    pub fn max() -> Result<Self> {
        Self::truncate(Timestamp::MAX)
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_millis(&self) -> i64 {
        self.0.as_millisecond()
    }

    /// The underlying jiff timestamp.
    pub fn as_timestamp(&self) -> Timestamp {
        self.0
    }

    /// Floors a jiff timestamp to the millisecond.
    pub(crate) fn truncate(timestamp: Timestamp) -> Result<Self> {
        // as_second and subsec_nanosecond share a sign, so the euclidean
        // split of the nanos floors toward negative infinity
        let sub_millis = i64::from(timestamp.subsec_nanosecond().div_euclid(NANOS_PER_MILLI));
        let millis = timestamp
            .as_second()
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|ms| ms.checked_add(sub_millis))
            .ok_or_else(|| ConversionError::out_of_range("instant seconds", timestamp))?;
        Self::from_millis(millis)
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> Self {
        instant.as_millis()
    }
}

impl TryFrom<i64> for Instant {
    type Error = ConversionError;

    fn try_from(millis: i64) -> Result<Self> {
        Instant::from_millis(millis)
    }
}

impl fmt::Display for Instant {
    /// Renders the instant in RFC 3339 form with a `Z` suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
