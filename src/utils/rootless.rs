//! Rootless Docker daemon detection.
//!
//! A rootless daemon runs under the invoking user's own uid, so that uid
//! owning the daemon socket is the only reliable local signal that does not
//! require querying the daemon itself.

use std::path::Path;

use crate::utils::container::ContainerRuntimeKind;
use crate::utils::environment::HostEnvironment;
use crate::utils::identity;
use crate::utils::output::{print_info, OutputLevel};

const UNIX_SOCKET_PREFIX: &str = "unix://";

/// Whether the active Docker daemon is running in rootless mode.
///
/// Only Docker is ever considered; any ambiguity or lookup failure resolves
/// to `false` so the caller falls back to explicit identity mapping.
pub fn is_docker_rootless(runtime: ContainerRuntimeKind, env: &HostEnvironment) -> bool {
    if runtime != ContainerRuntimeKind::Docker {
        return false;
    }
    decide(
        env.docker_host.as_deref(),
        identity::current_user_id().as_deref(),
        socket_owner_uid,
    )
}

/// The detection decision over its inputs, with the socket-owner lookup
/// injected. The lookup runs only once the uid is known to be eligible.
fn decide(
    docker_host: Option<&str>,
    current_uid: Option<&str>,
    owner_uid: impl FnOnce(&Path) -> Option<u32>,
) -> bool {
    let Some(socket) = docker_host.and_then(|host| host.strip_prefix(UNIX_SOCKET_PREFIX)) else {
        return false;
    };
    let Some(uid) = current_uid.filter(|uid| !uid.is_empty() && *uid != "0") else {
        return false;
    };
    match owner_uid(Path::new(socket)) {
        Some(owner) => uid == owner.to_string(),
        None => false,
    }
}

/// Owning uid of `path`, without following symlinks. Lookup failure is
/// reported informationally and treated as "not rootless" by the caller.
#[cfg(unix)]
fn socket_owner_uid(path: &Path) -> Option<u32> {
    use std::os::unix::fs::MetadataExt;

    match std::fs::symlink_metadata(path) {
        Ok(metadata) => Some(metadata.uid()),
        Err(err) => {
            print_info(
                &format!("Owner uid lookup on '{}' failed: {err}", path.display()),
                OutputLevel::Normal,
            );
            None
        }
    }
}

#[cfg(not(unix))]
fn socket_owner_uid(_path: &Path) -> Option<u32> {
    None
}
