//! SQLite storage for timestamp records.
//!
//! The storage boundary only ever sees absolute instants. `ts_value` is an
//! INTEGER of epoch milliseconds and `dt_value` is an RFC 3339 string in UTC,
//! so no session or connection time zone can reinterpret a stored value.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod record_queries;

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        Self::with_schema(connection)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        Self::with_schema(connection)
    }

    fn with_schema(connection: Connection) -> Result<Self> {
        connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;
        Ok(Self { connection })
    }
}
