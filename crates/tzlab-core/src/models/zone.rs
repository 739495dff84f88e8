//! Time zone identifiers.

use std::{fmt, str::FromStr};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// An IANA time zone identifier such as `UTC` or `America/Los_Angeles`.
///
/// Holding an identifier does not guarantee it exists; [`TimeZoneId::resolve`]
/// looks it up in the bundled rules database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    /// Wraps an identifier without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `UTC` zone.
    pub fn utc() -> Self {
        Self::new("UTC")
    }

    /// The identifier as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the identifier to its offset rules, including historical DST
    /// transitions.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnknownZone` if the identifier is not in the
    /// rules database.
    pub fn resolve(&self) -> Result<TimeZone> {
        TimeZone::get(&self.0).map_err(|source| ConversionError::UnknownZone {
            zone: self.0.clone(),
            source,
        })
    }
}

impl Default for TimeZoneId {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<&str> for TimeZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TimeZoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for TimeZoneId {
    type Err = ConversionError;

    /// Parses and validates an identifier in one step.
    fn from_str(s: &str) -> Result<Self> {
        let id = Self::new(s);
        id.resolve()?;
        Ok(id)
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
