//! Record operations for the RecordStore.

use log::debug;
use tokio::task;

use super::RecordStore;
use crate::{db::Database, error::Result, models::TimestampRecord};

impl RecordStore {
    /// Saves a new record and returns it with its assigned ID.
    pub async fn save(&self, record: &TimestampRecord) -> Result<TimestampRecord> {
        let db_path = self.db_path.clone();
        let record = record.clone();

        let saved = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_record(&record)
        })
        .await??;

        debug!("Saved record {:?}", saved.id);
        Ok(saved)
    }

    /// Finds a record by ID.
    pub async fn find(&self, id: u64) -> Result<Option<TimestampRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_record(id)
        })
        .await?
    }

    /// Lists all records in instant order.
    pub async fn list(&self) -> Result<Vec<TimestampRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_records()
        })
        .await?
    }

    /// Deletes a record. Returns `false` if no record had that ID.
    pub async fn delete(&self, id: u64) -> Result<bool> {
        let db_path = self.db_path.clone();

        let removed = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_record(id)
        })
        .await??;

        debug!("Delete record {id}: removed={removed}");
        Ok(removed)
    }
}
