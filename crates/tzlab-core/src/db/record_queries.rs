//! Timestamp record CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Instant, TimestampRecord},
};

const INSERT_RECORD_SQL: &str =
    "INSERT INTO timestamp_records (ts_value, dt_value) VALUES (?1, ?2)";
const SELECT_RECORD_SQL: &str =
    "SELECT id, ts_value, dt_value FROM timestamp_records WHERE id = ?1";
const LIST_RECORDS_SQL: &str =
    "SELECT id, ts_value, dt_value FROM timestamp_records ORDER BY ts_value, id";
const DELETE_RECORD_SQL: &str = "DELETE FROM timestamp_records WHERE id = ?1";

impl super::Database {
    /// Inserts a record and returns it with its new ID.
    ///
    /// Any ID already set on `record` is ignored.
    pub fn insert_record(&mut self, record: &TimestampRecord) -> Result<TimestampRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let ts_millis = record.ts_value.map(|i| i.as_millis());
        let dt_text = record.dt_value.map(|i| i.as_timestamp().to_string());

        tx.execute(INSERT_RECORD_SQL, params![ts_millis, dt_text])
            .db_context("Failed to insert record")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TimestampRecord {
            id: Some(id),
            ts_value: record.ts_value,
            dt_value: record.dt_value,
        })
    }

    /// Retrieves a record by its ID.
    pub fn get_record(&self, id: u64) -> Result<Option<TimestampRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECORD_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], record_from_row)
            .optional()
            .db_context("Failed to query record")
    }

    /// Lists all records ordered by `ts_value`, then ID.
    ///
    /// Ordering uses the stored instant, so records whose local wall-clock
    /// time repeats during a DST overlap still come back in true order.
    pub fn list_records(&self) -> Result<Vec<TimestampRecord>> {
        let mut stmt = self
            .connection
            .prepare(LIST_RECORDS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], record_from_row)
            .db_context("Failed to query records")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read record row")
    }

    /// Deletes a record. Returns whether a row was removed.
    pub fn delete_record(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_RECORD_SQL, params![id as i64])
            .db_context("Failed to delete record")?;
        Ok(removed > 0)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<TimestampRecord> {
    let ts_value = row
        .get::<_, Option<i64>>(1)?
        .map(|millis| {
            Instant::from_millis(millis).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(e))
            })
        })
        .transpose()?;

    let dt_value = row
        .get::<_, Option<String>>(2)?
        .map(|text| {
            text.parse::<Timestamp>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))
                .and_then(|ts| {
                    Instant::from_millis(ts.as_millisecond()).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                    })
                })
        })
        .transpose()?;

    Ok(TimestampRecord {
        id: Some(row.get::<_, i64>(0)? as u64),
        ts_value,
        dt_value,
    })
}
