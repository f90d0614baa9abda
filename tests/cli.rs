//! Tests for the clean binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name)
}

#[test]
fn convert_sample_to_akn() {
    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("convert").arg(sample_path("rps.clean"));

    let output_pred = predicate::str::starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
        .and(predicate::str::contains(r#"<section eId="sec_2">"#));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn convert_with_inspection_format() {
    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("convert")
        .arg(sample_path("rps.clean"))
        .arg("--format")
        .arg("ast-treeviz");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Act: Rock Paper Scissors Act\n"));
}

#[test]
fn convert_uses_config_file_and_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("clean.toml");
    fs::write(&config, "[convert]\nformat = \"indent-text\"\n").unwrap();
    let output = dir.path().join("out.txt");

    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("convert")
        .arg(sample_path("rps.clean"))
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output);

    cmd.assert().success().stdout(predicate::str::is_empty());
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("2. There are three signs:\nINDENT\n(1) Rock,\n"));
}

#[test]
fn convert_reports_errors_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.clean");
    fs::write(&input, "Broken Act\n\n1. Text:\n    (1) deep\n  (2) nowhere\n").unwrap();

    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("convert").arg(&input);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 5: unindent to 2 spaces"));
}

#[test]
fn convert_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("convert")
        .arg(sample_path("rps.clean"))
        .arg("--format")
        .arg("html-xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stage: html"));
}

#[test]
fn formats_lists_every_format() {
    let mut cmd = cargo_bin_cmd!("clean");
    cmd.arg("formats");

    cmd.assert().success().stdout(
        predicate::str::contains("akn-xml")
            .and(predicate::str::contains("ast-treeviz"))
            .and(predicate::str::contains("indent-text")),
    );
}
