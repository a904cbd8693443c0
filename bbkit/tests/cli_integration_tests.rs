// bbkit/tests/cli_integration_tests.rs
//! Command-line integration tests for the `bbkit` executable.
//!
//! These tests invoke the real binary with `assert_cmd`, feeding markup via
//! stdin or temporary files and asserting on stdout. `tempfile` keeps the
//! file-based scenarios isolated.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to run `bbkit` with the given stdin input and arguments.
fn run_bbkit(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("bbkit").unwrap();
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn render_from_stdin_to_stdout() {
    run_bbkit("[b]Hello[/b]", &["render"])
        .success()
        .stdout("<b>Hello</b>");
}

#[test]
fn render_is_case_sensitive_by_default() {
    run_bbkit("[B]Hello[/B]", &["render"])
        .success()
        .stdout("[B]Hello[/B]");
}

#[test]
fn render_honors_case_insensitive_flag() {
    run_bbkit("[B]Hello[/B]", &["render", "--case-insensitive"])
        .success()
        .stdout("<b>Hello</b>");
}

#[test]
fn strip_from_stdin_to_stdout() {
    run_bbkit("[url=http://example.com]Example[/url]", &["strip"])
        .success()
        .stdout("Example");
}

#[test]
fn strip_ignores_keyword_case() {
    run_bbkit("[B]Hello[/B]", &["strip"]).success().stdout("Hello");
}

#[test]
fn malformed_markup_is_not_an_error() {
    run_bbkit("[b]orphan", &["render"]).success().stdout("[b]orphan");
}

#[test]
fn render_with_input_and_output_files() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(b"[i]file based[/i]")?;
    let output = NamedTempFile::new()?;

    let mut cmd = Command::cargo_bin("bbkit")?;
    cmd.args([
        "render",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(output.path())?, "<i>file based</i>");
    Ok(())
}

#[test]
fn render_with_custom_catalog() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: shout
    pattern: '\[shout\](.*?)\[/shout\]'
    replace_with: '<strong>$1</strong>'
    content: '$1'
"#;
    let mut config = NamedTempFile::new()?;
    config.write_all(yaml_content.as_bytes())?;

    let mut cmd = Command::cargo_bin("bbkit")?;
    cmd.args(["render", "--config", config.path().to_str().unwrap()]);
    cmd.write_stdin("[shout]hi[/shout] and [b]bold[/b]".as_bytes());
    // The custom catalog replaces the default one entirely, so [b] stays.
    cmd.assert().success().stdout("<strong>hi</strong> and [b]bold[/b]");
    Ok(())
}

#[test]
fn broken_custom_catalog_fails_fast() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: broken
    pattern: '\[b\](.*?'
    replace_with: '<b>$1</b>'
    content: '$1'
"#;
    let mut config = NamedTempFile::new()?;
    config.write_all(yaml_content.as_bytes())?;

    let mut cmd = Command::cargo_bin("bbkit")?;
    cmd.args(["render", "--config", config.path().to_str().unwrap()]);
    cmd.write_stdin("[b]x[/b]".as_bytes());
    cmd.assert().failure();
    Ok(())
}

#[test]
fn tags_lists_the_capability_catalog() {
    let mut cmd = Command::cargo_bin("bbkit").unwrap();
    cmd.arg("tags");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bold Text"))
        .stdout(predicate::str::contains("[youtube]youtube_video_id[/youtube]"));
}
