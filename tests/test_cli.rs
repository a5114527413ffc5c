//! End-to-end tests for the yamljson binary

mod common;

use assert_cmd::Command;
use common::{read_output, write_fixture, SAMPLE_JSON, SAMPLE_YAML};
use predicates::prelude::*;
use tempfile::TempDir;

fn yamljson() -> Command {
    Command::cargo_bin("yamljson").unwrap()
}

#[test]
fn test_no_arguments_prints_help() {
    yamljson()
        .assert()
        .success()
        .stdout(predicate::str::contains("Switch format"))
        .stdout(predicate::str::contains("--from"));
}

#[test]
fn test_help_switch_prints_help() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "in.json", SAMPLE_JSON);
    let output = temp_dir.path().join("out.yaml");

    yamljson()
        .arg("--from:json")
        .arg(format!("--in:{}", input.display()))
        .arg(format!("--out:{}", output.display()))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected switches"));

    assert!(!output.exists(), "help must suppress the conversion");
}

#[test]
fn test_converts_json_to_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "in.json", SAMPLE_JSON);
    let output = temp_dir.path().join("out.yaml");

    yamljson()
        .arg("--from:json")
        .arg(format!("--in:{}", input.display()))
        .arg(format!("--out:{}", output.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting JSON"))
        .stdout(predicate::str::contains("to YAML"));

    assert_eq!(read_output(&output), "a: 1\nb:\n- true\n- null\n- x\n");
}

#[test]
fn test_converts_yaml_to_json_from_single_blob() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "in.yaml", SAMPLE_YAML);
    let output = temp_dir.path().join("out.json");

    yamljson()
        .arg(format!(
            "--out: {} --from: yaml --in: {}",
            output.display(),
            input.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting YAML"));

    let json = read_output(&output);
    assert!(json.starts_with("{\n\t\"a\": 1,\n"), "got: {:?}", json);
}

#[test]
fn test_unrecognized_format_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "in.json", SAMPLE_JSON);
    let output = temp_dir.path().join("out.xml");

    yamljson()
        .arg("--from:xml")
        .arg(format!("--in:{}", input.display()))
        .arg(format!("--out:{}", output.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized source format 'xml'"))
        .stdout(predicate::str::contains("Expected switches"));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("absent.yaml");
    let output = temp_dir.path().join("out.json");

    yamljson()
        .arg("--from:yaml")
        .arg(format!("--in:{}", input.display()))
        .arg(format!("--out:{}", output.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn test_malformed_yaml_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "bad.yaml", "a: [1, 2");
    let output = temp_dir.path().join("out.json");

    yamljson()
        .arg("--from:yaml")
        .arg(format!("--in:{}", input.display()))
        .arg(format!("--out:{}", output.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid YAML"));

    assert!(!output.exists());
}
