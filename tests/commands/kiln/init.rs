//! Tests for the init command.

use crate::common;

#[test]
fn test_long_help() {
    common::assert_cmd(&["init", "--help"], None);
}

#[test]
fn test_short_help() {
    common::assert_cmd(&["init", "-h"], None);
}

#[test]
fn test_init_creates_config() {
    let temp_dir = common::create_temp_dir();
    common::assert_cmd(&["init"], Some(&temp_dir));
    assert!(temp_dir.join("kiln.toml").exists());
    common::cleanup_temp_dir(&temp_dir);
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = common::create_temp_dir();
    common::assert_cmd(&["init"], Some(&temp_dir));
    common::refute_cmd(&["init"], Some(&temp_dir));
    common::cleanup_temp_dir(&temp_dir);
}

#[test]
fn test_init_with_custom_image() {
    let temp_dir = common::create_temp_dir();
    common::assert_cmd(
        &["init", "--image", "ghcr.io/kiln-build/native:latest"],
        Some(&temp_dir),
    );
    let content = std::fs::read_to_string(temp_dir.join("kiln.toml")).unwrap();
    assert!(content.contains("ghcr.io/kiln-build/native:latest"));
    common::cleanup_temp_dir(&temp_dir);
}
