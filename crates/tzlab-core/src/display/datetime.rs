//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting instants in a
//! consistent, human-readable format in an explicitly chosen time zone.

use std::fmt;

use jiff::tz::TimeZone;

use crate::models::Instant;

/// A wrapper around an [`Instant`] and a [`TimeZone`] that formats the
/// instant's local time in that zone via the `Display` trait.
///
/// The zone is always supplied by the caller. Nothing here consults the
/// system time zone, so the same instant renders identically on every host.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, PDT, PST)
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use tzlab_core::{display::ZonedDateTime, Instant};
///
/// let instant = Instant::from_millis(1661238000000).unwrap();
/// let zone = TimeZone::get("America/Los_Angeles").unwrap();
/// assert_eq!(
///     ZonedDateTime::new(&instant, &zone).to_string(),
///     "2022-08-23 00:00:00 PDT"
/// );
/// ```
pub struct ZonedDateTime<'a> {
    instant: &'a Instant,
    zone: &'a TimeZone,
}

impl<'a> ZonedDateTime<'a> {
    pub fn new(instant: &'a Instant, zone: &'a TimeZone) -> Self {
        Self { instant, zone }
    }
}

impl fmt::Display for ZonedDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.instant
                .as_timestamp()
                .to_zoned(self.zone.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
