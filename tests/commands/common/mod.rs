#![allow(dead_code)] // Test utilities - some functions may not be used in all tests

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Execute the CLI with the given arguments and a scrubbed environment
pub fn execute_cli(args: &[&str], working_dir: Option<&Path>) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kiln"));
    cmd.args(args);

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    // Start with a clean environment and only add what we need, so host
    // configuration (KILN_CONTAINER_TOOL, DOCKER_HOST) cannot leak in
    cmd.env_clear();
    for (key, value) in std::env::vars() {
        match key.as_str() {
            "PATH" | "HOME" | "USER" | "SHELL" | "TERM" | "RUST_BACKTRACE" => {
                cmd.env(key, value);
            }
            _ => {}
        }
    }

    let output = cmd.output().expect("Failed to execute command");

    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

pub fn run_cli(args: &[&str]) -> TestResult {
    execute_cli(args, None)
}

pub fn run_cli_in_dir(args: &[&str], dir: &Path) -> TestResult {
    execute_cli(args, Some(dir))
}

/// Generate a unique temporary directory name
pub fn generate_temp_dir_name() -> String {
    let pid = std::process::id();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let thread_name = std::thread::current()
        .name()
        .unwrap_or("test")
        .replace("::", "_");

    format!("{thread_name}_{pid}_{timestamp}")
}

pub fn create_temp_dir() -> PathBuf {
    let temp_dir_name = generate_temp_dir_name();
    let temp_dir = std::env::temp_dir().join(&temp_dir_name);
    std::fs::create_dir_all(&temp_dir).expect("Failed to create temp directory");
    temp_dir
}

pub fn cleanup_temp_dir(temp_dir: &Path) {
    std::fs::remove_dir_all(temp_dir).ok();
}

// Assertion helpers

pub fn assert_command_succeeds(result: &TestResult) {
    if !result.success {
        eprintln!("Command failed with exit code {}", result.exit_code);
        eprintln!("Stdout: {}", result.stdout);
        eprintln!("Stderr: {}", result.stderr);
    }
    assert!(result.success);
}

pub fn assert_command_fails(result: &TestResult) {
    if result.success {
        eprintln!("Command unexpectedly succeeded");
        eprintln!("Stdout: {}", result.stdout);
        eprintln!("Stderr: {}", result.stderr);
    }
    assert!(!result.success);
}

pub fn assert_non_empty_output(result: &TestResult) {
    assert!(
        !result.stdout.is_empty() || !result.stderr.is_empty(),
        "Expected non-empty response text, but both stdout and stderr were empty"
    );
}

pub fn assert_cmd(args: &[&str], working_dir: Option<&Path>) {
    let result = execute_cli(args, working_dir);
    assert_command_succeeds(&result);
    assert_non_empty_output(&result);
}

pub fn refute_cmd(args: &[&str], working_dir: Option<&Path>) {
    let result = execute_cli(args, working_dir);
    assert_command_fails(&result);
    assert_non_empty_output(&result);
}
