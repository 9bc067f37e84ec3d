//! Volume mount rendering and host path translation for Kiln CLI.

use std::sync::OnceLock;

use regex::Regex;

/// SELinux relabel mode allowing the bind mount to be shared across
/// containers under enforcing policy.
pub const SHARED_RELABEL_MODE: &str = "z";

/// A bind mount exposing a host directory at a fixed in-container path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
    pub host_path: String,
    pub container_path: String,
    pub mode: String,
}

impl VolumeMount {
    pub fn new(
        host_path: impl Into<String>,
        container_path: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            host_path: host_path.into(),
            container_path: container_path.into(),
            mode: mode.into(),
        }
    }

    /// Mount relabeled for shared access (`:z`).
    pub fn shared(host_path: impl Into<String>, container_path: impl Into<String>) -> Self {
        Self::new(host_path, container_path, SHARED_RELABEL_MODE)
    }

    /// Render as the value passed to `-v`.
    pub fn spec(&self) -> String {
        format!("{}:{}:{}", self.host_path, self.container_path, self.mode)
    }
}

fn drive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<drive>[A-Za-z]):(?P<rest>/.*)?$").expect("drive letter pattern")
    })
}

/// Translate a Windows host path into the mount syntax the runtime expects.
///
/// Backslashes become forward slashes and a leading drive letter is folded
/// into the path: `C:\w\out` mounts as `//c/w/out` under Docker, while
/// Podman machines expose host drives below `/mnt`, giving `/mnt/c/w/out`.
/// Paths without a drive letter only get their separators normalized.
pub fn translate_volume_path(path: &str, podman: bool) -> String {
    let normalized = path.replace('\\', "/");
    let Some(captures) = drive_pattern().captures(&normalized) else {
        return normalized;
    };
    let drive = captures["drive"].to_lowercase();
    let rest = captures.name("rest").map(|m| m.as_str()).unwrap_or("");
    if podman {
        format!("/mnt/{drive}{rest}")
    } else {
        format!("//{drive}{rest}")
    }
}
