//! CLI error-contract tests.
//!
//! The interactive viewer itself needs a terminal, so these tests only
//! exercise the paths that finish before raw mode is entered: argument
//! validation and the load step, which must fail with a nonzero exit and
//! the error on stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn orbitscope() -> Command {
    Command::cargo_bin("orbitscope").unwrap()
}

#[test]
fn no_files_is_a_usage_error() {
    orbitscope()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_file_fails_with_file_error() {
    orbitscope()
        .arg("/no/such/orbit.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn malformed_row_fails_with_line_number() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"0,0,0,1,1\n1,1,2\n").unwrap();

    orbitscope()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn non_numeric_field_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"0,0,zero,1,1\n").unwrap();

    orbitscope()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed trajectory row"));
}

#[test]
fn first_bad_file_aborts_the_whole_run() {
    let mut good = NamedTempFile::new().unwrap();
    good.write_all(b"0,0,0,1,1\n").unwrap();

    orbitscope()
        .arg(good.path())
        .arg("/no/such/orbit.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn help_mentions_titles_and_column_order() {
    orbitscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("t,y1,y2,v1,v2"))
        .stdout(predicate::str::contains("--title"));
}
