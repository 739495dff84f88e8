//! Integration tests comparing CLI output with the core library.
//!
//! The CLI renders the same `Display` wrappers and converters a library
//! caller would use, so the two must agree exactly in plain-text mode.

use std::process::Command;

use jiff::tz::TimeZone;
use tempfile::TempDir;
use tzlab_core::{
    convert,
    display::{RecordView, Records, SavedRecord},
    Instant, JsonMapper, RecordStore, RecordStoreBuilder, TimestampRecord, OFFSET_PATTERN,
};

/// Helper function to create a test store with temporary database
async fn create_test_store() -> (RecordStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let store = RecordStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create store");

    (store, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tzlab"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn instant(millis: i64) -> Instant {
    Instant::from_millis(millis).expect("millis in range")
}

#[test]
fn test_format_matches_library() {
    let temp_dir = TempDir::new().unwrap();
    let db_str = temp_dir.path().join("unused.db");
    let db_str = db_str.to_str().unwrap();

    for millis in [1667725140000_i64, 1667725260000, 1647165540000, 1647165660000] {
        let cli_output = run_cli_command(
            db_str,
            &[
                "--zone",
                "America/Los_Angeles",
                "format",
                &millis.to_string(),
                "--pattern",
                OFFSET_PATTERN,
            ],
        );
        let direct =
            convert::format(instant(millis), OFFSET_PATTERN, "America/Los_Angeles").unwrap();
        assert_eq!(cli_output, format!("{direct}\n"));
    }
}

#[test]
fn test_conversion_commands_do_not_create_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("never.db");

    run_cli_command(db_path.to_str().unwrap(), &["wire", "to", "0"]);
    run_cli_command(db_path.to_str().unwrap(), &["format", "0"]);

    assert!(!db_path.exists());
}

/// Record creation output matches the `SavedRecord` wrapper
#[tokio::test]
async fn test_saved_record_display_consistency() {
    let (store, temp_dir) = create_test_store().await;
    let cli_db = temp_dir.path().join("cli.db");

    let cli_output = run_cli_command(
        cli_db.to_str().unwrap(),
        &[
            "--zone",
            "America/Los_Angeles",
            "record",
            "add",
            "--ts",
            "1667725140000",
            "--dt",
            "1667725260000",
        ],
    );

    let saved = store
        .save(&TimestampRecord {
            id: None,
            ts_value: Some(instant(1667725140000)),
            dt_value: Some(instant(1667725260000)),
        })
        .await
        .expect("Failed to save record");
    let la = TimeZone::get("America/Los_Angeles").unwrap();
    let direct_output = SavedRecord(RecordView::new(&saved, &la)).to_string();

    assert_eq!(cli_output, direct_output);
}

/// Listing through the CLI shows what the library stored
#[tokio::test]
async fn test_list_reads_library_records() {
    let (store, temp_dir) = create_test_store().await;
    let db_str = temp_dir.path().join("test.db");
    let db_str = db_str.to_str().unwrap();

    for millis in [1647136860000, 1647165660000, 1647165540000] {
        store
            .save(&TimestampRecord::with_both(instant(millis)))
            .await
            .expect("Failed to save record");
    }

    let cli_output = run_cli_command(db_str, &["record", "list"]);
    let records = store.list().await.expect("Failed to list records");
    let direct_output = Records::new(&records, &TimeZone::UTC).to_string();

    assert_eq!(cli_output, direct_output);
}

/// JSON output matches a mapper configured with the same zone
#[tokio::test]
async fn test_record_json_consistency() {
    let (store, temp_dir) = create_test_store().await;
    let db_str = temp_dir.path().join("test.db");
    let db_str = db_str.to_str().unwrap();

    let saved = store
        .save(&TimestampRecord::with_both(instant(1661238000000)))
        .await
        .expect("Failed to save record");
    let id = saved.id.expect("saved record has an id").to_string();

    let cli_output = run_cli_command(
        db_str,
        &["--zone", "Europe/Berlin", "record", "json", &id, "--pretty"],
    );
    let direct = JsonMapper::new("Europe/Berlin")
        .unwrap()
        .to_json_pretty(&saved)
        .unwrap();

    assert_eq!(cli_output, format!("{direct}\n"));

    let parsed = JsonMapper::utc().unwrap().from_json(&cli_output).unwrap();
    assert_eq!(parsed, saved);
}
