use std::env;
use std::process::Command;

fn main() {
    // This runs only during build
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "cargo:rustc-env=KILN_CLI_VERSION={} {}",
        env!("CARGO_PKG_VERSION"),
        git_hash
    );
}
