use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("142"));
}

#[test]
fn part1_fail_on_line_without_digits() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/no_digits_inputs.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line #2"))
        .stderr(predicate::str::contains("doesn't have any digits"));
}

#[test]
fn part1_fail_on_missing_input_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_file.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.txt"));
}
