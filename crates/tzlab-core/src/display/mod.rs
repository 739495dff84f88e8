//! Markdown display wrappers.
//!
//! Domain values carry no time zone, so every wrapper that shows local time
//! borrows an explicit [`jiff::tz::TimeZone`] next to the value it formats.
//!
//! - [`datetime`]: a single instant in a zone
//! - [`records`]: records and record lists
//! - [`status`]: success/failure confirmation messages

pub mod datetime;
pub mod records;
pub mod status;

pub use datetime::ZonedDateTime;
pub use records::{RecordView, Records, SavedRecord};
pub use status::OperationStatus;
