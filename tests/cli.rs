use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_template_argument() {
    Command::cargo_bin("formfill")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEMPLATE"))
        .stdout(predicate::str::contains("--server"));
}

#[test]
fn missing_template_argument_fails() {
    Command::cargo_bin("formfill")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn nonexistent_template_file_fails() {
    Command::cargo_bin("formfill")
        .unwrap()
        .arg("/nonexistent/form.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load template"));
}

#[test]
fn invalid_template_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"{ not json").unwrap();

    Command::cargo_bin("formfill")
        .unwrap()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load template"));
}

#[test]
fn template_without_fields_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"{"fields": []}"#).unwrap();

    Command::cargo_bin("formfill")
        .unwrap()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no fields"));
}
