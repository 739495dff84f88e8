use tempfile::{NamedTempFile, TempDir};
use tzlab_core::{Database, Instant, RecordStore, RecordStoreBuilder};

/// Helper function to create a test store
#[allow(dead_code)]
pub async fn create_test_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = RecordStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Helper function to create a temporary database for testing
#[allow(dead_code)]
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[allow(dead_code)]
pub fn instant(millis: i64) -> Instant {
    Instant::from_millis(millis).expect("millis in range")
}
