//! Numeric user identity lookup via the external `id` tool.

use std::process::Command;

use crate::utils::output::{print_info, OutputLevel};

/// Failure to resolve the invoking user's numeric identity.
///
/// Callers treat an unresolved identity as "skip identity mapping", never
/// as uid 0, so this error is logged and swallowed rather than propagated.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("failed to run 'id {flag}': {source}")]
    Spawn {
        flag: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("'id {flag}' exited with {status}")]
    Failed {
        flag: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("'id {flag}' produced non-UTF-8 output")]
    Encoding { flag: &'static str },
}

/// Numeric uid of the invoking user, or `None` when it cannot be resolved.
pub fn current_user_id() -> Option<String> {
    query("-ur")
}

/// Numeric primary gid of the invoking user, or `None` when it cannot be resolved.
pub fn current_group_id() -> Option<String> {
    query("-gr")
}

fn query(flag: &'static str) -> Option<String> {
    match run_id(flag) {
        Ok(id) => Some(id),
        Err(err) => {
            print_info(
                &format!("Skipping user identity mapping: {err}"),
                OutputLevel::Normal,
            );
            None
        }
    }
}

pub(crate) fn run_id(flag: &'static str) -> Result<String, IdentityError> {
    let output = Command::new("id")
        .arg(flag)
        .output()
        .map_err(|source| IdentityError::Spawn { flag, source })?;

    if !output.status.success() {
        return Err(IdentityError::Failed {
            flag,
            status: output.status,
        });
    }

    let text =
        String::from_utf8(output.stdout).map_err(|_| IdentityError::Encoding { flag })?;
    Ok(text.trim().to_string())
}
