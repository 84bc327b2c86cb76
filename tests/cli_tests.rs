//! Integration tests for the Weft CLI
//!
//! These tests run the actual CLI binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn weft_cmd() -> Command {
    Command::cargo_bin("weft").unwrap()
}

const DOCUMENT: &str = r#"
tag: body
children:
  - tag: h1
    attrs:
      data-bind: couple.namesShort
  - tag: img
    attrs:
      src: spinner.gif
      data-bind: couple.groom.photo
  - tag: h3
    attrs:
      data-bind: story.chapters[1].title
"#;

const DATA: &str = r#"
couple:
  namesShort: "Riana & Iqbal"
  groom:
    photo: "./assets/images/cowo.webp"
story:
  chapters:
    - title: "First Meeting"
    - title: "The Proposal"
event:
  countdownDatetime: "2026-04-17 10:00:00"
"#;

fn write_fixtures(dir: &TempDir) -> (String, String) {
    let doc = dir.path().join("page.weft.yaml");
    let data = dir.path().join("content.yaml");
    fs::write(&doc, DOCUMENT).unwrap();
    fs::write(&data, DATA).unwrap();
    (
        doc.to_string_lossy().into_owned(),
        data.to_string_lossy().into_owned(),
    )
}

#[test]
fn test_help_flag() {
    weft_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "declarative data binding for annotated documents",
        ));
}

#[test]
fn test_apply_writes_resolved_document() {
    let temp_dir = TempDir::new().unwrap();
    let (doc, data) = write_fixtures(&temp_dir);
    let out = temp_dir.path().join("resolved.yaml");

    weft_cmd()
        .args(["apply", &doc, "--data", &data, "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("3 applied, 0 failed"));

    let resolved = fs::read_to_string(&out).unwrap();
    assert!(resolved.contains("Riana & Iqbal"));
    assert!(resolved.contains("data-src: ./assets/images/cowo.webp"));
    assert!(resolved.contains("The Proposal"));
    // Immediate source untouched; countdown stamped on the root
    assert!(resolved.contains("src: spinner.gif"));
    assert!(resolved.contains("data-time: 2026-04-17 10:00:00"));
}

#[test]
fn test_apply_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let (doc, data) = write_fixtures(&temp_dir);

    weft_cmd()
        .args(["apply", &doc, "--data", &data])
        .assert()
        .success()
        .stdout(predicate::str::contains("Riana & Iqbal"));
}

#[test]
fn test_apply_without_data_degrades_softly() {
    let temp_dir = TempDir::new().unwrap();
    let (doc, _) = write_fixtures(&temp_dir);

    // No --data: the pass still completes and the markup survives verbatim
    weft_cmd()
        .args(["apply", &doc])
        .assert()
        .success()
        .stderr(predicate::str::contains("0 applied, 3 failed"))
        .stderr(predicate::str::contains("WEFT-020"));
}

#[test]
fn test_apply_with_unresolved_path_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let (_, data) = write_fixtures(&temp_dir);
    let doc = temp_dir.path().join("partial.weft.yaml");
    fs::write(
        &doc,
        r#"
tag: body
children:
  - tag: span
    attrs:
      data-bind: couple.namesShort
  - tag: span
    attrs:
      data-bind: no.such.path
"#,
    )
    .unwrap();

    weft_cmd()
        .args(["apply", doc.to_str().unwrap(), "--data", &data])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 applied, 1 failed"))
        .stderr(predicate::str::contains("WEFT-011"));
}

#[test]
fn test_apply_missing_document_fails() {
    weft_cmd()
        .args(["apply", "/nonexistent/page.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn test_apply_json_data_source() {
    let temp_dir = TempDir::new().unwrap();
    let (doc, _) = write_fixtures(&temp_dir);
    let data = temp_dir.path().join("content.json");
    fs::write(
        &data,
        r#"{"couple": {"namesShort": "R & I", "groom": {"photo": "p.webp"}},
            "story": {"chapters": [{"title": "a"}, {"title": "b"}]}}"#,
    )
    .unwrap();

    weft_cmd()
        .args(["apply", &doc, "--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("R & I"));
}

#[test]
fn test_validate_clean_document() {
    let temp_dir = TempDir::new().unwrap();
    let (doc, data) = write_fixtures(&temp_dir);

    weft_cmd()
        .args(["validate", &doc, "--data", &data])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 declarations: 0 invalid, 0 unresolved"));
}

#[test]
fn test_validate_reports_malformed_path() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("bad.weft.yaml");
    fs::write(
        &doc,
        r#"
tag: body
children:
  - tag: span
    attrs:
      data-bind: "couple..name"
"#,
    )
    .unwrap();

    weft_cmd()
        .args(["validate", doc.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("WEFT-010"))
        .stderr(predicate::str::contains("invalid binding declaration"));
}

#[test]
fn test_validate_reports_unknown_kind() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("kind.weft.yaml");
    fs::write(
        &doc,
        r#"
tag: span
attrs:
  data-bind: couple.namesShort
  data-update: blink
"#,
    )
    .unwrap();

    weft_cmd()
        .args(["validate", doc.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("WEFT-030"));
}

#[test]
fn test_validate_with_data_flags_unresolved() {
    let temp_dir = TempDir::new().unwrap();
    let (_, data) = write_fixtures(&temp_dir);
    let doc = temp_dir.path().join("unresolved.weft.yaml");
    fs::write(
        &doc,
        r#"
tag: span
attrs:
  data-bind: story.chapters[9].title
"#,
    )
    .unwrap();

    // Unresolved paths are findings, not validation failures
    weft_cmd()
        .args(["validate", doc.to_str().unwrap(), "--data", &data])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unresolved"))
        .stdout(predicate::str::contains("WEFT-011"));
}

#[test]
fn test_demo_fixtures_stay_loadable() {
    weft_cmd()
        .args([
            "validate",
            "demos/invitation.weft.yaml",
            "--data",
            "demos/invitation.data.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 invalid, 0 unresolved"));
}
