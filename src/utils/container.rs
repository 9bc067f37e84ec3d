//! Container invocation core: runtime classification, identity mapping,
//! argument building, and process execution for containerized builds.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tokio::process::Command as AsyncCommand;

use crate::utils::environment::{HostEnvironment, OsFamily};
use crate::utils::identity;
use crate::utils::output::{print_error, print_info, OutputLevel};
use crate::utils::rootless;
use crate::utils::volume::{self, VolumeMount};

/// In-container mount point of the build volume unless configured otherwise.
pub const DEFAULT_BUILD_VOLUME_PATH: &str = "/project";

/// Kind of container runtime behind the configured tool. Fixed for the
/// lifetime of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRuntimeKind {
    Docker,
    Podman,
    Other,
}

impl ContainerRuntimeKind {
    /// Classify the runtime behind `tool` by probing `<tool> --version`.
    ///
    /// A binary named `docker` can be podman's docker shim, so the version
    /// text wins over the name. A failed probe falls back to the name; the
    /// runtime itself will produce a usable error later if it is absent.
    pub fn detect(tool: &str) -> Self {
        match version_output(tool) {
            Some(text) => {
                Self::classify_version_output(&text).unwrap_or_else(|| Self::from_tool_name(tool))
            }
            None => Self::from_tool_name(tool),
        }
    }

    /// Classify by the tool's binary name alone.
    pub fn from_tool_name(tool: &str) -> Self {
        let name = Path::new(tool)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(tool);
        match name {
            "docker" => ContainerRuntimeKind::Docker,
            "podman" => ContainerRuntimeKind::Podman,
            _ => ContainerRuntimeKind::Other,
        }
    }

    pub(crate) fn classify_version_output(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        if text.contains("podman") {
            Some(ContainerRuntimeKind::Podman)
        } else if text.contains("docker") {
            Some(ContainerRuntimeKind::Docker)
        } else {
            None
        }
    }
}

fn version_output(tool: &str) -> Option<String> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Identity mapping applied to the container so files written into the
/// build mount stay owned by the invoking host user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityPolicy {
    /// Inside a rootless daemon's user namespace container-root already
    /// maps to the host user, so explicit root is safe and simplest.
    RootlessRoot,
    /// Map the resolved host uid/gid 1:1 into the container.
    MapUidGid { uid: String, gid: String },
    /// Defer to the runtime's default identity handling.
    RuntimeDefault,
}

impl IdentityPolicy {
    /// Choose the policy for this host. Identity mapping is meaningless or
    /// unsupported off Linux; unresolved uid/gid defers to the runtime.
    pub fn detect(runtime: ContainerRuntimeKind, env: &HostEnvironment) -> Self {
        if env.os_family != OsFamily::Linux {
            return IdentityPolicy::RuntimeDefault;
        }
        if rootless::is_docker_rootless(runtime, env) {
            return IdentityPolicy::RootlessRoot;
        }
        match (identity::current_user_id(), identity::current_group_id()) {
            (Some(uid), Some(gid)) if !uid.is_empty() && !gid.is_empty() => {
                IdentityPolicy::MapUidGid { uid, gid }
            }
            _ => IdentityPolicy::RuntimeDefault,
        }
    }

    /// Runtime flags this policy contributes to the fixed prefix.
    fn runtime_args(&self, runtime: ContainerRuntimeKind) -> Vec<String> {
        match self {
            IdentityPolicy::RootlessRoot => vec!["--user".to_string(), "0".to_string()],
            IdentityPolicy::MapUidGid { uid, gid } => {
                let mut args = vec!["--user".to_string(), format!("{uid}:{gid}")];
                if runtime == ContainerRuntimeKind::Podman {
                    // Without keep-id podman remaps the uid and writes into
                    // the bind mount are denied.
                    args.push("--userns=keep-id".to_string());
                }
                args
            }
            IdentityPolicy::RuntimeDefault => Vec::new(),
        }
    }
}

/// Composes the container runtime argument list for a build.
///
/// The prefix (collaborator tokens plus identity-mapping flags) is fixed at
/// construction and never recomputed; every [`build_args`] call appends a
/// fresh volume-mount token to a copy of it.
///
/// [`build_args`]: ContainerArgBuilder::build_args
pub struct ContainerArgBuilder {
    runtime: ContainerRuntimeKind,
    env: HostEnvironment,
    prefix: Vec<String>,
}

impl ContainerArgBuilder {
    /// Detect the identity policy for this host and fix the prefix.
    ///
    /// `base_args` are the collaborator-contributed tokens (`--rm`, image
    /// flags, user-supplied extra args); they are appended to, never
    /// removed.
    pub fn new(
        runtime: ContainerRuntimeKind,
        env: HostEnvironment,
        base_args: Vec<String>,
    ) -> Self {
        let policy = IdentityPolicy::detect(runtime, &env);
        Self::with_policy(runtime, env, base_args, policy)
    }

    /// Fix the prefix from an already-chosen identity policy.
    pub fn with_policy(
        runtime: ContainerRuntimeKind,
        env: HostEnvironment,
        base_args: Vec<String>,
        policy: IdentityPolicy,
    ) -> Self {
        let mut prefix = base_args;
        prefix.extend(policy.runtime_args(runtime));
        Self {
            runtime,
            env,
            prefix,
        }
    }

    /// The fixed prefix, identical across every call on this instance.
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Argument list for one build: the fixed prefix plus the volume-mount
    /// token, which is always the last token appended.
    pub fn build_args(&self, output_path: &str, container_volume_path: &str) -> Vec<String> {
        let mut args = self.prefix.clone();
        let host_path = if self.env.os_family == OsFamily::Windows {
            volume::translate_volume_path(
                output_path,
                self.runtime == ContainerRuntimeKind::Podman,
            )
        } else {
            output_path.to_string()
        };
        let mount = VolumeMount::shared(host_path, container_volume_path);
        args.push("-v".to_string());
        args.push(mount.spec());
        args
    }
}

/// One containerized build run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Container image the build runs in
    pub image: String,
    /// Command executed inside the container
    pub command: Vec<String>,
    /// Host directory mounted as the build volume
    pub output_path: String,
    /// In-container mount point of the build volume
    pub container_volume_path: String,
    /// Echo the full container command line
    pub verbose: bool,
}

/// Process-invocation collaborator: spawns `<tool> run ...` for a build.
pub struct BuildContainer {
    pub tool: String,
    pub verbose: bool,
}

impl BuildContainer {
    /// Create a new BuildContainer for the given container tool
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            verbose: false,
        }
    }

    /// Set verbose mode
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the build container to completion and report whether it exited
    /// successfully.
    pub async fn run_build(
        &self,
        args: &ContainerArgBuilder,
        config: &RunConfig,
    ) -> Result<bool> {
        let mut invocation = vec![self.tool.clone(), "run".to_string()];
        invocation.extend(args.build_args(&config.output_path, &config.container_volume_path));
        invocation.push(config.image.clone());
        invocation.extend(config.command.iter().cloned());

        if self.verbose || config.verbose {
            print_info(
                &format!("Container command: {}", invocation.join(" ")),
                OutputLevel::Normal,
            );
        }

        let status = AsyncCommand::new(&invocation[0])
            .args(&invocation[1..])
            .status()
            .await
            .with_context(|| format!("Failed to execute '{}'", self.tool))?;

        if !status.success() {
            print_error(
                &format!("Container build exited with {status}"),
                OutputLevel::Normal,
            );
        }

        Ok(status.success())
    }
}
