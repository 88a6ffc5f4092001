//! Smoke tests running the built `pokesort` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs pokesort with `args`, feeding `input` on stdin.
fn run(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokesort"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start pokesort");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for pokesort")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list_prints_original_order() {
    let output = run(&["list"], "");
    assert!(output.status.success(), "list failed: {output:?}");

    let text = stdout(&output);
    assert!(text.contains("Original List"));
    let greninja = text.find("Greninja").expect("Greninja listed");
    let abra = text.find("Abra").expect("Abra listed");
    assert!(greninja < abra, "Greninja should be listed before Abra");
}

#[test]
fn test_sort_by_hp() {
    let output = run(&["sort", "--by", "hp"], "");
    assert!(output.status.success(), "sort failed: {output:?}");

    let text = stdout(&output);
    assert!(text.contains("Sorted by HP"));
    assert!(text.contains("Total Comparisons: 153"));
    assert!(text.contains("Time Elapsed:"));

    let position = |name: &str| text.find(name).unwrap_or_else(|| panic!("{name} missing"));
    assert!(position("Abra") < position("Pikachu"));
    assert!(position("Pikachu") < position("Charmander"));
    assert!(position("Sylveon") < position("Tyranitar"));
}

#[test]
fn test_sort_with_streamed_steps() {
    let output = run(&["sort", "--by", "name", "--step", "--no-pause", "--no-clear"], "");
    assert!(output.status.success(), "sort failed: {output:?}");

    let text = stdout(&output);
    assert!(text.contains("Pass 1/18: Finding minimum in unsorted portion..."));
    assert!(text.contains("Pass 17/18 completed"));
    assert!(text.contains("Sorting Complete!"));
    assert!(text.contains("Sorted Alphabetically"));
}

#[test]
fn test_quitting_a_step_sort_fails() {
    let output = run(&["sort", "--by", "type", "--step", "--no-clear"], "\n\nq\n");
    assert!(!output.status.success());
    assert!(stdout(&output).contains("stopped before completion"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("stopped by user"));
}

#[test]
fn test_step_sort_runs_to_completion_when_input_ends() {
    let output = run(&["sort", "--by", "stage", "--step", "--no-clear"], "");
    assert!(output.status.success(), "sort failed: {output:?}");
    assert!(stdout(&output).contains("Sorting Complete!"));
}

#[test]
fn test_menu_session() {
    let output = run(&["menu", "--no-clear"], "1\n\n5\nn\n\n0\n");
    assert!(output.status.success(), "menu failed: {output:?}");

    let text = stdout(&output);
    assert!(text.contains("POKEMON SELECTION SORT"));
    assert!(text.contains("Original List"));
    assert!(text.contains("Sorted by Type (Primary)"));
    assert!(text.contains("Thank you for using Pokemon Selection Sort!"));
}

#[test]
fn test_unknown_sort_key_is_rejected() {
    let output = run(&["sort", "--by", "weight"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("weight"));
}

#[test]
fn test_no_pause_requires_step() {
    let output = run(&["sort", "--by", "hp", "--no-pause"], "");
    assert!(!output.status.success());
}
