//! Tests for the build command.

use crate::common;

#[test]
fn test_long_help() {
    common::assert_cmd(&["build", "--help"], None);
}

#[test]
fn test_short_help() {
    common::assert_cmd(&["build", "-h"], None);
}

#[test]
fn test_build_without_config_fails() {
    let temp_dir = common::create_temp_dir();
    common::refute_cmd(&["build"], Some(&temp_dir));
    common::cleanup_temp_dir(&temp_dir);
}

#[test]
fn test_build_reports_missing_config_path() {
    let temp_dir = common::create_temp_dir();
    let result = common::run_cli_in_dir(&["build", "-C", "missing.toml"], &temp_dir);
    common::assert_command_fails(&result);
    assert!(result.stderr.contains("missing.toml"));
    common::cleanup_temp_dir(&temp_dir);
}

#[test]
fn test_build_requires_image_in_config() {
    let temp_dir = common::create_temp_dir();
    std::fs::write(
        temp_dir.join("kiln.toml"),
        "[build]\ncommand = \"make\"\n",
    )
    .unwrap();

    let result = common::run_cli_in_dir(&["build"], &temp_dir);
    common::assert_command_fails(&result);
    assert!(result.stderr.contains("build.image"));
    common::cleanup_temp_dir(&temp_dir);
}
