//! CLI tests for `dmm render`, `dmm check`, `dmm batch`, and `dmm demo`.
//!
//! Spawns the dmm binary in a scratch directory and verifies stdout and exit
//! codes.

use std::path::Path;
use std::process::{Command, Output};

use dmm::exit_codes;
use dmm::test_support::batch_toml;

fn dmm(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dmm"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run dmm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn render_numeric_measure_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(
        temp.path(),
        &["render", "measure-voltage-dc", "--range", "10.0", "--resolution", "0.001"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "MEAS:VOLT:DC? 10.0,0.001\n");
}

#[test]
fn render_defaults_prints_bare_header() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["render"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "MEAS:VOLT:DC?\n");
}

#[test]
fn render_invalid_keyword_exits_with_invalid_parameter() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["render", "configure-current-ac", "--range", "auto"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PARAMETER));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid range parameter"));
}

#[test]
fn render_resolution_without_range_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["render", "measure-voltage-dc", "--resolution", "0.001"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PARAMETER));
}

#[test]
fn render_uses_config_format_and_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("dmm.toml"),
        "format = \"json\"\n\n[defaults]\ncommand = \"configure-current-ac\"\nrange = \"min\"\n",
    )
    .expect("write config");

    let output = dmm(temp.path(), &["render", "--resolution", "max"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "{\"command\":\"configure-current-ac\",\"line\":\"CONF:CURR:AC MIN,MAX\"}\n"
    );
}

#[test]
fn invalid_config_exits_with_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("dmm.toml"), "format = \"yaml\"\n").expect("write config");

    let output = dmm(temp.path(), &["render"]);
    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
}

#[test]
fn check_normalizes_command_line() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["check", "conf:curr:ac min, max"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "CONF:CURR:AC MIN,MAX\n");

    let output = dmm(temp.path(), &["check", "MEAS:VOLT:DC? 0"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PARAMETER));

    let output = dmm(temp.path(), &["check", "*RST"]);
    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
}

#[test]
fn batch_renders_valid_entries_and_reports_invalid_ones() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("batch.toml");
    std::fs::write(
        &path,
        batch_toml(&[
            ("measure-voltage-dc", "10.0", "0.001"),
            ("measure-voltage-dc", "\"DEF\"", "0.001"),
            ("configure-current-ac", "\"min\"", "\"max\""),
        ]),
    )
    .expect("write batch");

    let output = dmm(temp.path(), &["batch", "batch.toml"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PARAMETER));
    assert_eq!(
        stdout(&output),
        "MEAS:VOLT:DC? 10.0,0.001\nCONF:CURR:AC MIN,MAX\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entry 2: resolution 0.001 specified without a valid (non-DEF) range"));
}

#[test]
fn batch_missing_file_exits_with_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["batch", "missing.toml"]);
    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
}

#[test]
fn demo_prints_examples() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dmm(temp.path(), &["demo"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "measure-voltage-dc: MEAS:VOLT:DC? 10.0,0.001\n\
         configure-current-ac: CONF:CURR:AC MIN,MAX\n\
         rejected: resolution 0.001 specified without a valid (non-DEF) range\n"
    );
}
