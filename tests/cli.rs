//! Integration tests for the `mdheadnum` command-line interface.
//!
//! Covers stdin processing, per-depth overrides, number removal, previews,
//! configuration files and in-place rewriting.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

const EXPECTED_REGULATION: &str = include_str!("data/regulation_expected.md");
const CONFIG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/numbering.json");

fn mdheadnum() -> Command {
    Command::cargo_bin("mdheadnum").expect("Failed to create cargo command for mdheadnum")
}

#[test]
fn test_cli_in_place_requires_file() {
    mdheadnum().arg("--in-place").assert().failure();
}

#[test]
fn test_cli_version_flag() {
    mdheadnum()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("mdheadnum {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_default_styles_from_stdin() {
    mdheadnum()
        .write_stdin("# Intro\ntext\n## Scope\n")
        .assert()
        .success()
        .stdout("# 第一章Intro\ntext\n## 第一章.第一节、Scope\n");
}

#[test]
fn test_cli_level_overrides() {
    mdheadnum()
        .args(["--level", "1=chapter-chinese", "--level", "2=decimal-paren: "])
        .write_stdin("# Intro\n## Background\n## Goals\n")
        .assert()
        .success()
        .stdout("# 第一章Intro\n## 第一章.（1） Background\n## 第一章.（2） Goals\n");
}

#[test]
fn test_cli_only_last_level() {
    mdheadnum()
        .args(["--only-last-level", "--level", "1=decimal:.", "--level", "2=decimal: "])
        .write_stdin("# A\n## B\n## C\n")
        .assert()
        .success()
        .stdout("# 1.A\n## 1 B\n## 2 C\n")
        .stdout(predicate::str::contains("1.1").not());
}

#[rstest]
#[case("# 第一章Intro\n## （1） Background\n", "# Intro\n## Background\n")]
#[case("# IV. History\n### ③ Detail\n", "# History\n### Detail\n")]
#[case("no headings here\n", "no headings here\n")]
fn test_cli_remove(#[case] input: &str, #[case] expected: &str) {
    mdheadnum()
        .arg("--remove")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn test_cli_remove_conflicts_with_levels() {
    mdheadnum()
        .args(["--remove", "--level", "1=decimal"])
        .write_stdin("# A\n")
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_unknown_style() {
    mdheadnum()
        .args(["--level", "1=klingon"])
        .write_stdin("# A\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn test_cli_preview() {
    mdheadnum()
        .arg("--preview")
        .write_stdin("# Intro\n## A\n## B\n## C\n")
        .assert()
        .success()
        .stdout("→ 第一章Intro\n→ 第一章.第一节、A\n→ 第一章.第二节、B\n");
}

#[test]
fn test_cli_preview_without_headings() {
    mdheadnum()
        .arg("--preview")
        .write_stdin("plain text\n")
        .assert()
        .success()
        .stdout("(no headings found)\n");
}

#[rstest]
fn test_cli_config_file(regulation: &str) {
    mdheadnum()
        .args(["--config", CONFIG_FILE])
        .write_stdin(regulation)
        .assert()
        .success()
        .stdout(EXPECTED_REGULATION);
}

#[test]
fn test_cli_missing_config_uses_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let missing = dir.path().join("absent.json");
    mdheadnum()
        .arg("--config")
        .arg(&missing)
        .write_stdin("# Intro\n")
        .assert()
        .success()
        .stdout("# 第一章Intro\n");
}

#[test]
fn test_cli_malformed_config_fails() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = write_markdown(dir.path(), "broken.json", "{\"level1\": 3");
    mdheadnum()
        .arg("--config")
        .arg(&path)
        .write_stdin("# Intro\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_cli_save_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("saved.json");
    mdheadnum()
        .args(["--only-last-level", "--level", "4=circle: ", "--save-config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read saved config"))
            .expect("saved config is JSON");
    assert_eq!(saved["onlyLastLevel"], true);
    assert_eq!(saved["level1"]["format"], "chapter-chinese");
    assert_eq!(saved["level4"]["format"], "circle");
    assert_eq!(saved["level4"]["separator"], " ");
}

#[test]
fn test_cli_list_styles() {
    mdheadnum()
        .arg("--list-styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter-chinese\t第一章, 第二章"))
        .stdout(predicate::str::starts_with("none\t"));
}

/// Rewrites a file in place with the provided flags and asserts idempotence.
fn run_in_place(flags: &[&str], input: &str, expected: &str) {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = write_markdown(dir.path(), "sample.md", input);

    for _ in 0..2 {
        mdheadnum()
            .arg("--in-place")
            .args(flags)
            .arg(&file_path)
            .assert()
            .success()
            .stdout("")
            .stderr("");
        let out = fs::read_to_string(&file_path).expect("failed to read output file");
        assert_eq!(out, expected);
    }
}

#[rstest]
#[case(&["--only-last-level"], "# A\n## B\n", "# 第一章A\n## 第一节、B\n")]
#[case(&["--remove"], "# 第一章A\n## 第一节、B\n", "# A\n## B\n")]
#[case(
    &["--only-last-level", "--level", "2=lower-roman:. "],
    "# A\n## 7. B\n## C\n",
    "# 第一章A\n## i. B\n## ii. C\n"
)]
fn test_cli_in_place_variants(
    #[case] flags: &[&str],
    #[case] input: &str,
    #[case] expected: &str,
) {
    run_in_place(flags, input, expected);
}
