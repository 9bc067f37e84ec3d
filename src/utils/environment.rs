//! Host environment snapshot for container invocation decisions.

use std::env;

/// Operating system family of the build host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Windows,
    MacOs,
    Other,
}

impl OsFamily {
    /// Family of the host this process is running on.
    pub fn current() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Classify an `std::env::consts::OS` style name.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "linux" => OsFamily::Linux,
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOs,
            _ => OsFamily::Other,
        }
    }
}

/// Process environment relevant to the container invocation, captured once
/// when the argument builder is constructed. Detection stays deterministic
/// and tests can inject a snapshot instead of mutating real process state.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    pub os_family: OsFamily,
    /// Raw `DOCKER_HOST` value, if set.
    pub docker_host: Option<String>,
}

impl HostEnvironment {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            os_family: OsFamily::current(),
            docker_host: env::var("DOCKER_HOST").ok(),
        }
    }
}
