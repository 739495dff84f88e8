//! Timezone-aware conversion between instants, local text and wire timestamps.
//!
//! Every operation takes its zone and pattern explicitly. Nothing here reads
//! the process-wide default time zone (`TZ`, `/etc/localtime`), so results
//! depend only on the arguments and the bundled tz database.
//!
//! # DST policy
//!
//! Local times without an offset are resolved with [`Disambiguation`]. The
//! default, [`Disambiguation::Compatible`]:
//!
//! - shifts a time inside a "spring forward" gap forward by the gap length
//!   (`02:30` becomes `03:30` with the post-transition offset)
//! - picks the earlier occurrence of a time inside a "fall back" overlap
//!   (the pre-transition offset)
//!
//! ```rust
//! use tzlab_core::convert::{self, LOCAL_PATTERN, OFFSET_PATTERN};
//!
//! # fn example() -> tzlab_core::Result<()> {
//! let instant = convert::parse("2022-08-23T07:00:00.000", LOCAL_PATTERN, "America/Los_Angeles")?;
//! assert_eq!(instant.as_millis(), 1661263200000);
//!
//! let text = convert::format(instant, OFFSET_PATTERN, "UTC")?;
//! assert_eq!(text, "2022-08-23T14:00:00.000+0000");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::fmt;

use jiff::tz::{AmbiguousOffset, TimeZone};
use log::debug;

pub use crate::pattern::{DateTimePattern, ISO_OFFSET_PATTERN, LOCAL_PATTERN, OFFSET_PATTERN};
use crate::{
    error::{AmbiguityKind, ConversionError, Result},
    models::{Instant, TimeZoneId, WireTimestamp},
};

/// Policy for local times that fall in a DST gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disambiguation {
    /// Gap: shift forward past the gap. Overlap: earlier occurrence.
    #[default]
    Compatible,
    /// Always the earlier of the two candidate instants.
    Earlier,
    /// Always the later of the two candidate instants.
    Later,
    /// Fail with `ConversionError::AmbiguousLocalTime`.
    Reject,
}

impl Disambiguation {
    /// Lowercase policy name, as accepted by the CLI `--policy` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disambiguation::Compatible => "compatible",
            Disambiguation::Earlier => "earlier",
            Disambiguation::Later => "later",
            Disambiguation::Reject => "reject",
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reusable converter bound to one pattern, one zone and one DST policy.
///
/// The zone is resolved once at build time. The converter is immutable and
/// `Send + Sync`, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TimestampConverter {
    pattern: DateTimePattern,
    zone_id: TimeZoneId,
    zone: TimeZone,
    disambiguation: Disambiguation,
}

impl TimestampConverter {
    /// Starts a builder with [`LOCAL_PATTERN`], zone `UTC` and the
    /// compatible DST policy.
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// The policy applied to local times in a DST gap or overlap.
    pub fn disambiguation(&self) -> Disambiguation {
        self.disambiguation
    }

    /// Parses text into an instant.
    ///
    /// An offset in the text wins over the converter's zone. Without one, the
    /// local fields are interpreted under the zone's rules and the DST policy.
    pub fn parse(&self, text: &str) -> Result<Instant> {
        let parsed = self.pattern.parse(text)?;

        let timestamp = match parsed.offset {
            Some(offset) => TimeZone::fixed(offset)
                .to_ambiguous_timestamp(parsed.datetime)
                .compatible(),
            None => {
                let ambiguous = self.zone.to_ambiguous_timestamp(parsed.datetime);
                let kind = match ambiguous.offset() {
                    AmbiguousOffset::Unambiguous { .. } => None,
                    AmbiguousOffset::Gap { .. } => Some(AmbiguityKind::Gap),
                    AmbiguousOffset::Fold { .. } => Some(AmbiguityKind::Fold),
                };
                if let Some(kind) = kind {
                    debug!(
                        "{} {} in {}, resolving with {}",
                        parsed.datetime, kind, self.zone_id, self.disambiguation
                    );
                }
                match (self.disambiguation, kind) {
                    (Disambiguation::Reject, Some(kind)) => {
                        return Err(ConversionError::AmbiguousLocalTime {
                            local: parsed.datetime.to_string(),
                            zone: self.zone_id.to_string(),
                            kind,
                        });
                    }
                    (Disambiguation::Earlier, _) => ambiguous.earlier(),
                    (Disambiguation::Later, _) => ambiguous.later(),
                    (Disambiguation::Compatible | Disambiguation::Reject, _) => {
                        ambiguous.compatible()
                    }
                }
            }
        }
        .map_err(|e| ConversionError::out_of_range("parsed date-time", e))?;

        Instant::truncate(timestamp)
    }

    /// Formats an instant with the zone's offset at that instant.
    pub fn format(&self, instant: Instant) -> String {
        let zoned = instant.as_timestamp().to_zoned(self.zone.clone());
        self.pattern.format_zoned(&zoned)
    }
}

/// Builder for [`TimestampConverter`].
#[derive(Debug, Clone)]
pub struct ConverterBuilder {
    pattern: String,
    zone: TimeZoneId,
    disambiguation: Disambiguation,
}

impl ConverterBuilder {
    /// Starts from [`LOCAL_PATTERN`], zone `UTC` and the compatible policy.
    pub fn new() -> Self {
        Self {
            pattern: LOCAL_PATTERN.to_string(),
            zone: TimeZoneId::utc(),
            disambiguation: Disambiguation::default(),
        }
    }

    /// Sets the pattern. It is compiled by [`ConverterBuilder::build`].
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the zone used for local fields.
    pub fn zone(mut self, zone: impl Into<TimeZoneId>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Sets the DST gap and overlap policy.
    pub fn disambiguation(mut self, disambiguation: Disambiguation) -> Self {
        self.disambiguation = disambiguation;
        self
    }

    /// Compiles the pattern and resolves the zone.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidPattern` or
    /// `ConversionError::UnknownZone`.
    pub fn build(self) -> Result<TimestampConverter> {
        let pattern = DateTimePattern::compile(&self.pattern)?;
        let zone = self.zone.resolve()?;
        Ok(TimestampConverter {
            pattern,
            zone_id: self.zone,
            zone,
            disambiguation: self.disambiguation,
        })
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `text` with `pattern`, interpreting offset-less text in `zone`.
pub fn parse(text: &str, pattern: &str, zone: &str) -> Result<Instant> {
    TimestampConverter::builder()
        .pattern(pattern)
        .zone(zone)
        .build()?
        .parse(text)
}

/// Formats `instant` with `pattern`, showing local fields for `zone`.
pub fn format(instant: Instant, pattern: &str, zone: &str) -> Result<String> {
    Ok(TimestampConverter::builder()
        .pattern(pattern)
        .zone(zone)
        .build()?
        .format(instant))
}

/// Splits an instant into whole seconds and a nanosecond remainder.
pub fn to_wire_timestamp(instant: Instant) -> WireTimestamp {
    WireTimestamp::from(instant)
}

/// Rebuilds an instant from a wire timestamp at millisecond precision.
pub fn from_wire_timestamp(ts: WireTimestamp) -> Result<Instant> {
    Instant::try_from(ts)
}
