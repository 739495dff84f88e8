//! Async façade over the record database.
//!
//! Each operation opens the SQLite file on tokio's blocking pool, runs one
//! query and closes it again, so a [`RecordStore`] holds nothing but a path
//! and can be shared freely between tasks.
//!
//! ```rust,no_run
//! use tzlab_core::{Instant, RecordStoreBuilder, TimestampRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RecordStoreBuilder::new()
//!     .with_database_path(Some("records.db"))
//!     .build()
//!     .await?;
//!
//! let saved = store
//!     .save(&TimestampRecord::with_both(Instant::from_millis(1661238000000)?))
//!     .await?;
//! let fetched = store.find(saved.id.unwrap_or_default()).await?;
//! assert_eq!(fetched, Some(saved));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod record_ops;


pub use builder::RecordStoreBuilder;

/// Persistent store for [`TimestampRecord`](crate::models::TimestampRecord)s.
pub struct RecordStore {
    pub(crate) db_path: PathBuf,
}

impl RecordStore {
    /// Creates a new store with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the backing SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
