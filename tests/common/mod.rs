//! Utility helpers shared across integration tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rstest::fixture;

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// A short regulation-style document with two chapters.
#[fixture]
pub fn regulation() -> &'static str {
    include_str!("../data/regulation_input.md")
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_markdown(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write test file");
    path
}

/// Run the binary with `args` and return its captured output.
pub fn run_cli_with_args(args: &[&str]) -> std::process::Output {
    assert_cmd::Command::cargo_bin("mdheadnum")
        .expect("failed to create command")
        .args(args)
        .write_stdin("")
        .output()
        .expect("failed to run command")
}
