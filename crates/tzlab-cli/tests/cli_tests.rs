use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tzlab_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tzlab").expect("Failed to find tzlab binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_parse_utc() {
    tzlab_cmd()
        .args(["parse", "2022-08-23T07:00:00.000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **millis**: 1661238000000"))
        .stdout(predicate::str::contains("- **utc**: 2022-08-23T07:00:00Z"));
}

#[test]
fn test_cli_parse_in_zone() {
    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "parse",
            "2022-08-23T07:00:00.000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1661263200000"));
}

#[test]
fn test_cli_parse_offset_pattern_ignores_zone() {
    tzlab_cmd()
        .args([
            "--zone",
            "Asia/Tokyo",
            "parse",
            "2022-08-23T07:00:00.000+0000",
            "--pattern",
            "yyyy-MM-dd'T'HH:mm:ss.SSSZ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1661238000000"));
}

#[test]
fn test_cli_parse_gap_policies() {
    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "parse",
            "2022-03-13T02:30:00.000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1647167400000"));

    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "parse",
            "2022-03-13T02:30:00.000",
            "--policy",
            "earlier",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1647163800000"));

    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "parse",
            "2022-03-13T02:30:00.000",
            "--policy",
            "reject",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DST gap"));
}

#[test]
fn test_cli_parse_overlap_later() {
    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "parse",
            "2022-11-06T01:30:00.000",
            "--policy",
            "later",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1667727000000"));
}

#[test]
fn test_cli_parse_bad_text() {
    tzlab_cmd()
        .args(["parse", "23/08/2022"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_cli_format_local_and_offset() {
    tzlab_cmd()
        .args(["--zone", "America/Los_Angeles", "format", "1661238000000"])
        .assert()
        .success()
        .stdout("2022-08-23T00:00:00.000\n");

    tzlab_cmd()
        .args([
            "--zone",
            "America/Los_Angeles",
            "format",
            "1661238000000",
            "--pattern",
            "yyyy-MM-dd'T'HH:mm:ss.SSSZ",
        ])
        .assert()
        .success()
        .stdout("2022-08-23T00:00:00.000-0700\n");
}

#[test]
fn test_cli_format_keeps_markdown_characters_in_rich_mode() {
    for (pattern, expected) in [
        ("yyyy'*'MM'*'dd", "1970*01*01\n"),
        ("yyyy'_'MM'_'dd", "1970_01_01\n"),
        ("'`'HH'#'mm", "`00#00\n"),
    ] {
        Command::cargo_bin("tzlab")
            .expect("Failed to find tzlab binary")
            .args(["format", "0", "--pattern", pattern])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_cli_wire_to_is_plain_json_in_rich_mode() {
    Command::cargo_bin("tzlab")
        .expect("Failed to find tzlab binary")
        .args(["wire", "to", "-1"])
        .assert()
        .success()
        .stdout(r#"{"seconds":-1,"nanos":999000000}"#.to_owned() + "\n");
}

#[test]
fn test_cli_format_negative_millis() {
    tzlab_cmd()
        .args(["format", "-1"])
        .assert()
        .success()
        .stdout("1969-12-31T23:59:59.999\n");
}

#[test]
fn test_cli_unknown_zone() {
    tzlab_cmd()
        .args(["--zone", "Mars/Olympus", "format", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mars/Olympus"));
}

#[test]
fn test_cli_wire_to_and_from() {
    tzlab_cmd()
        .args(["wire", "to", "1661238000123"])
        .assert()
        .success()
        .stdout(r#"{"seconds":1661238000,"nanos":123000000}"#.to_owned() + "\n");

    tzlab_cmd()
        .args(["wire", "from", "1661238000", "123456789"])
        .assert()
        .success()
        .stdout("1661238000123\n");
}

#[test]
fn test_cli_wire_from_rejects_bad_nanos() {
    tzlab_cmd()
        .args(["wire", "from", "0", "1000000000"])
        .assert()
        .failure();
}

#[test]
fn test_cli_no_subcommand_shows_now() {
    tzlab_cmd()
        .args(["--zone", "Europe/Berlin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Europe/Berlin**:"))
        .stdout(predicate::str::contains("- **millis**:"));
}

#[test]
fn test_cli_record_add_and_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tzlab_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--zone",
            "America/Los_Angeles",
            "record",
            "add",
            "--ts",
            "1661238000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved record with ID: 1"))
        .stdout(predicate::str::contains(
            "- **ts_value**: 2022-08-23 00:00:00 PDT (1661238000000 ms)",
        ))
        .stdout(predicate::str::contains("- **dt_value**: null"));

    tzlab_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "record",
            "show",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Record 1"))
        .stdout(predicate::str::contains("2022-08-23 07:00:00 UTC"));
}

#[test]
fn test_cli_record_show_missing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tzlab_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "record",
            "show",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 7 not found"));
}

#[test]
fn test_cli_record_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tzlab_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "record", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_cli_record_list_distinguishes_overlap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    for millis in ["1667725260000", "1667725140000"] {
        tzlab_cmd()
            .args(["--database-file", db, "record", "add", "--ts", millis, "--dt", millis])
            .assert()
            .success();
    }

    let output = tzlab_cmd()
        .args([
            "--database-file",
            db,
            "--zone",
            "America/Los_Angeles",
            "record",
            "list",
        ])
        .output()
        .expect("Failed to run tzlab");
    let stdout = String::from_utf8(output.stdout).unwrap();

    let pdt = stdout
        .find("2022-11-06 01:59:00 PDT")
        .expect("PDT record missing");
    let pst = stdout
        .find("2022-11-06 01:01:00 PST")
        .expect("PST record missing");
    assert!(pdt < pst, "records should be ordered by instant:\n{stdout}");
}

#[test]
fn test_cli_record_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tzlab_cmd()
        .args(["--database-file", db, "record", "add", "--ts", "0"])
        .assert()
        .success();

    tzlab_cmd()
        .args(["--database-file", db, "record", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted record 1"));

    tzlab_cmd()
        .args(["--database-file", db, "record", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Record 1 not found"));
}

#[test]
fn test_cli_record_json_uses_zone() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tzlab_cmd()
        .args(["--database-file", db, "record", "add", "--ts", "1661238000000"])
        .assert()
        .success();

    tzlab_cmd()
        .args(["--database-file", db, "record", "json", "1"])
        .assert()
        .success()
        .stdout(
            r#"{"id":1,"tsValue":"2022-08-23T07:00:00.000+00:00","dtValue":null}"#.to_owned()
                + "\n",
        );

    tzlab_cmd()
        .args([
            "--database-file",
            db,
            "--zone",
            "America/Los_Angeles",
            "record",
            "json",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""tsValue":"2022-08-23T00:00:00.000-07:00""#,
        ));
}

#[test]
fn test_cli_process_tz_is_ignored() {
    tzlab_cmd()
        .env("TZ", "Asia/Kolkata")
        .args(["format", "1661238000000"])
        .assert()
        .success()
        .stdout("2022-08-23T07:00:00.000\n");

    tzlab_cmd()
        .env("TZ", "America/New_York")
        .args(["parse", "2022-08-23T07:00:00.000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1661238000000"));
}

#[test]
fn test_cli_help() {
    tzlab_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--zone"))
        .stdout(predicate::str::contains("record"));
}
