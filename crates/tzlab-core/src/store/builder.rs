//! Builder for creating and configuring RecordStore instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::RecordStore;
use crate::{
    db::Database,
    error::{ConversionError, Result},
};

/// Builder for creating and configuring RecordStore instances.
#[derive(Debug, Clone)]
pub struct RecordStoreBuilder {
    database_path: Option<PathBuf>,
}

impl RecordStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tzlab/tzlab.db` or `~/.local/share/tzlab/tzlab.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::FileSystem` if the database path is invalid
    /// Returns `ConversionError::Database` if database initialization fails
    pub async fn build(self) -> Result<RecordStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConversionError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening record store at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ConversionError>(())
        })
        .await??;

        Ok(RecordStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tzlab")
            .place_data_file("tzlab.db")
            .map_err(|e| ConversionError::XdgDirectory(e.to_string()))
    }
}

impl Default for RecordStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
