use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn locdex(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("locdex").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn first_run_lists_and_persists_seed() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("chicago"))
        .stdout(predicate::str::contains("middle_florida"))
        .stdout(predicate::str::contains("Enabled: 0"));

    assert!(temp_dir.path().join("locations_v1.json").exists());
}

#[test]
fn search_shows_only_matches() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["list", "--search", "TEXAS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("western_texas"))
        .stdout(predicate::str::contains("eastern_texas"))
        .stdout(predicate::str::contains("chicago").not());
}

#[test]
fn add_then_list_shows_new_location_first() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["add", "depot", "--city", "Reno", "--state", "Nevada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added."));

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. depot"))
        .stdout(predicate::str::contains("Total: "))
        .stdout(predicate::str::contains("Enabled: 1"));
}

#[test]
fn add_with_blank_name_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required."));
}

#[test]
fn enable_switches_several_at_once() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["enable", "chicago", "newyork"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled 2 locations."));

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled: 2"));
}

#[test]
fn edit_keeps_unspecified_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["edit", "eastern_texas", "--city", "Longview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved changes."));

    locdex(temp_dir.path())
        .args(["list", "-s", "longview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eastern_texas"))
        .stdout(predicate::str::contains("123 N Main St"));
}

#[test]
fn edit_to_blank_name_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["edit", "chicago", "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty."));
}

#[test]
fn remove_asks_for_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["rm", "chicago"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    locdex(temp_dir.path())
        .args(["rm", "chicago"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"chicago\"."));

    locdex(temp_dir.path())
        .args(["rm", "chicago", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No location named"));
}

#[test]
fn export_writes_string_status() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("out.json");

    locdex(temp_dir.path())
        .args(["enable", "florida"])
        .assert()
        .success();

    locdex(temp_dir.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 locations."));

    let text = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
    assert_eq!(value[1]["name"], "florida");
    assert_eq!(value[1]["status"], "1");
    assert_eq!(value[0]["status"], "0");
}

#[test]
fn import_adds_export_file_to_the_top() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("in.json");
    std::fs::write(
        &file,
        r#"[{"name": "depot", "status": "1"}, {"name": "", "city": "x"}]"#,
    )
    .unwrap();

    locdex(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped entry 2"))
        .stdout(predicate::str::contains("Imported 1 location."));

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. depot"))
        .stdout(predicate::str::contains("Total: "));
}

#[test]
fn corrupt_snapshot_falls_back_to_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("locations_v1.json"), "{oops").unwrap();

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("northern_georgia"));
}

#[test]
fn snapshot_with_one_bad_record_keeps_the_others() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = r#"[
        {"id":"5b0c4f0e-8a53-4a52-9a0c-6f1f1c6b2b10","name":"my_office","city":"Tulsa","status":true},
        {"id":"0d7e5a3c-1f0b-4c53-8d1e-2f8b0e7a9c44","status":false},
        {"id":"lq2x9k","name":"depot","status":"1"}
    ]"#;
    std::fs::write(temp_dir.path().join("locations_v1.json"), snapshot).unwrap();

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("my_office"))
        .stdout(predicate::str::contains("depot"))
        .stdout(predicate::str::contains("Enabled: 2 • Disabled: 0"))
        .stdout(predicate::str::contains("chicago").not());

    let stored = std::fs::read_to_string(temp_dir.path().join("locations_v1.json")).unwrap();
    assert!(stored.contains("my_office"));
    assert!(!stored.contains("lq2x9k"));
}

#[test]
fn config_sets_export_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .args(["config", "export-file", "places.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file set to places.json"));

    locdex(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file = places.json"))
        .stdout(predicate::str::contains("storage-key = locations:v1"));
}

#[test]
fn shell_keeps_selection_between_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "search texas\nselect-all\nsearch\nenable\nquit\n";

    locdex(temp_dir.path())
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 selected (all visible)"))
        .stdout(predicate::str::contains("Enabled 2 locations."));

    locdex(temp_dir.path())
        .args(["list", "-s", "texas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled: 2"));
}

#[test]
fn shell_bulk_without_selection_reports_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    locdex(temp_dir.path())
        .arg("shell")
        .write_stdin("disable\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Select at least one item first."));
}

#[test]
fn shell_remove_clears_selection_and_exit_ends_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "select chicago florida\nrm chicago --yes\nexit\nlist\n";

    locdex(temp_dir.path())
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 selected"))
        .stdout(predicate::str::contains("Removed \"chicago\"."));

    locdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("chicago").not())
        .stdout(predicate::str::contains("Enabled: 0 • Disabled: 7"));
}
