//! Core library for tzlab, a timezone-aware timestamp toolkit.
//!
//! This crate converts between absolute instants, local date-time text and
//! seconds + nanoseconds wire timestamps. Every conversion takes its time zone
//! as an explicit argument. Nothing reads or writes a process-wide default
//! zone, so results are deterministic and safe to compute from any thread.
//!
//! # Layers
//!
//! - [`convert`]: parse/format with a pattern and zone, DST disambiguation,
//!   wire timestamp conversion
//! - [`pattern`]: compiled `yyyy-MM-dd'T'HH:mm:ss.SSSZ`-style patterns
//! - [`json`]: a zone-configured JSON mapper for [`TimestampRecord`]s
//! - [`db`] / [`store`]: SQLite persistence that only stores absolute instants
//! - [`display`]: markdown wrappers for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use tzlab_core::{convert, Instant, JsonMapper, TimestampRecord};
//!
//! # fn example() -> tzlab_core::Result<()> {
//! let instant = Instant::from_millis(1661238000000)?; // 2022-08-23T07:00:00Z
//!
//! let local = convert::format(instant, convert::OFFSET_PATTERN, "America/Los_Angeles")?;
//! assert_eq!(local, "2022-08-23T00:00:00.000-0700");
//!
//! let wire = convert::to_wire_timestamp(instant);
//! assert_eq!(convert::from_wire_timestamp(wire)?, instant);
//!
//! let json = JsonMapper::utc()?.to_json(&TimestampRecord {
//!     id: None,
//!     ts_value: Some(instant),
//!     dt_value: None,
//! })?;
//! assert_eq!(json, r#"{"id":null,"tsValue":"2022-08-23T07:00:00.000+00:00","dtValue":null}"#);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod convert;
pub mod db;
pub mod display;
pub mod error;
pub mod json;
pub mod models;
pub mod pattern;
pub mod store;

// Re-export commonly used types
pub use convert::{ConverterBuilder, Disambiguation, TimestampConverter};
pub use db::Database;
pub use error::{AmbiguityKind, ConversionError, Result};
pub use json::JsonMapper;
pub use models::{Instant, TimeZoneId, TimestampRecord, WireTimestamp};
pub use pattern::{DateTimePattern, ISO_OFFSET_PATTERN, LOCAL_PATTERN, OFFSET_PATTERN};
pub use store::{RecordStore, RecordStoreBuilder};
