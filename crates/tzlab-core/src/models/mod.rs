//! Value types shared by the converter, the JSON mapper and the store.
//!
//! - [`Instant`]: absolute point in time with millisecond precision
//! - [`WireTimestamp`]: seconds + nanoseconds transport form
//! - [`TimeZoneId`]: IANA identifier resolved against the bundled tz database
//! - [`TimestampRecord`]: the persisted entity
//!
//! None of these carry an implicit time zone. Whenever local fields are needed
//! the zone is passed in explicitly.

pub mod instant;
pub mod record;
pub mod wire;
pub mod zone;

#[cfg(test)]
mod tests;

pub use instant::Instant;
pub use record::TimestampRecord;
pub use wire::WireTimestamp;
pub use zone::TimeZoneId;
