//! End-to-end tests running the demo binary under different verbosities.

use std::process::{Command, Output};

fn run_demo(shell_verbosity: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_console-logger-demo"));
    command.env_remove("SHELL_VERBOSITY").env("NO_COLOR", "1");
    if let Some(value) = shell_verbosity {
        command.env("SHELL_VERBOSITY", value);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run console-logger-demo: {error}"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn default_verbosity_shows_warnings_and_above() {
    let output = run_demo(None);
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.contains("[WARNING] skipped malformed row\n"));
    assert!(stdout.contains("[ERROR] upload failed\n"));
    assert!(stdout.contains("[CRITICAL] disk almost full\n"));
    assert!(!stdout.contains("[INFO]"));
    assert!(!stdout.contains("[NOTICE]"));
    assert!(!stdout.contains("after the command"));
}

#[test]
fn debug_verbosity_shows_everything_with_payloads() {
    let output = run_demo(Some("3"));
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with(
        "[DEBUG] resolved configuration\narray:1 [\n  \"verbosity\" => \"debug\"\n]\n"
    ));
    assert!(stdout.contains("[INFO] batch imported\narray:1 [\n  \"rows\" => 128\n]\n"));
    assert!(stdout.contains("[NOTICE] cache warmed\n"));
    assert!(stdout.contains("    0 => 1\n"));
    assert!(!stdout.contains("after the command"));
}

#[test]
fn quiet_verbosity_shows_errors_only() {
    let stdout = stdout_of(&run_demo(Some("-1")));
    assert!(!stdout.contains("[WARNING]"));
    assert!(stdout.contains("[ERROR] upload failed\n"));
}

#[test]
fn silent_verbosity_prints_nothing() {
    let output = run_demo(Some("-2"));
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unrecognised_verbosity_falls_back_to_normal() {
    let stdout = stdout_of(&run_demo(Some("loud")));
    assert!(stdout.contains("[WARNING] skipped malformed row\n"));
    assert!(!stdout.contains("[NOTICE]"));
}
