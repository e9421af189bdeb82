use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn devac() -> Command {
    Command::cargo_bin("devac").unwrap()
}

#[test]
fn help_flag_prints_usage_and_exits_zero() {
    devac()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devac"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    devac()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing input file"));
}

#[test]
fn unreadable_input_path_exits_nonzero() {
    devac()
        .arg("does-not-exist.dv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn tokenize_only_prints_one_line_per_token() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    fs::write(&input, "पूर्णांक x = 1;").unwrap();

    devac()
        .arg(input.to_str().unwrap())
        .arg("-t")
        .assert()
        .success()
        .stdout(predicate::str::contains("Token: KEYWORD_INT, Line: 1, Column: 1"))
        .stdout(predicate::str::contains("Token: EOF"));
}

#[test]
fn parse_only_writes_no_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    fs::write(&input, "पूर्णांक x = 1;").unwrap();

    devac()
        .arg(input.to_str().unwrap())
        .arg("-p")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed successfully."));

    assert!(!dir.path().join("main.c").exists());
}

#[test]
fn parse_error_exits_nonzero_before_semantic_analysis() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    fs::write(&input, "पूर्णांक x = ;").unwrap();

    devac()
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn semantic_error_exits_nonzero_and_writes_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    fs::write(&input, "पूर्णांक x = 1.5;").unwrap();

    devac()
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Type mismatch in variable initialization."));

    assert!(!dir.path().join("main.c").exists());
}

#[test]
fn successful_compilation_writes_c_file_next_to_the_default_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    fs::write(&input, "शून्य मुख्य() { वापस; }").unwrap();

    devac().arg(input.to_str().unwrap()).assert().success();

    let output = dir.path().join("main.c");
    let contents = fs::read_to_string(output).unwrap();
    assert!(contents.contains("#include <stdio.h>"));
    assert!(contents.contains("void मुख्य() {\n    return;\n}\n"));
}

#[test]
fn dash_o_overrides_the_default_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.dv");
    let output = dir.path().join("generated.c");
    fs::write(&input, "शून्य मुख्य() { वापस; }").unwrap();

    devac()
        .arg(input.to_str().unwrap())
        .arg("-o")
        .arg(output.to_str().unwrap())
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("main.c").exists());
}
