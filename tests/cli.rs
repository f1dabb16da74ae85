//! End-to-end tests of the `schedsim` binary: exit codes and diagnostics.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn process_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn schedsim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schedsim"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SCHEDSIM_TRACE_JSON")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_valid_file_runs_every_algorithm() {
    let file = process_file("1,5,0\n2,3,1\n");
    let output = schedsim(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    for title in [
        "First-come, first-serve",
        "Shortest-job-first",
        "Priority",
        "Round-robin",
    ] {
        assert!(text.contains(title), "missing {title}");
    }
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_malformed_field_names_line_and_field() {
    let file = process_file("1,x,0\n");
    let output = schedsim(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("line 1: invalid burst"), "stderr: {err}");
    assert_eq!(err.matches("invalid digit found in string").count(), 1, "stderr: {err}");
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = schedsim(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must give a scheduling file to process"));
}

#[test]
fn test_duplicate_id_fails() {
    let file = process_file("1,5,0\n1,3,1\n");
    let output = schedsim(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("duplicate process ID: 1"), "stderr: {err}");
    assert!(!err.contains("run failed"), "stderr: {err}");
}

#[test]
fn test_quoted_fields_accepted() {
    let file = process_file("\"1\",\"5\",\"0\"\n\"2\",\"3\",\"1\"\n");
    let output = schedsim(&["-a", "fcfs", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("|  2 |        - |     3 |       1 |       4 |"));
}
