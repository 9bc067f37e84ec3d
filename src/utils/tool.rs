//! Container tool resolution utilities for Kiln CLI.

use std::env;

/// Default container tool when nothing else is configured.
pub const DEFAULT_CONTAINER_TOOL: &str = "docker";

/// Resolve the container tool with proper precedence.
///
/// Precedence order:
/// 1. CLI argument (--container-tool)
/// 2. Environment variable (KILN_CONTAINER_TOOL)
/// 3. Configuration file tool
/// 4. Default ("docker")
pub fn resolve_container_tool(cli_tool: Option<&str>, config_tool: Option<&str>) -> String {
    if let Some(tool) = cli_tool {
        return tool.to_string();
    }

    if let Some(tool) = get_tool_from_env() {
        return tool;
    }

    if let Some(tool) = config_tool {
        return tool.to_string();
    }

    DEFAULT_CONTAINER_TOOL.to_string()
}

/// Get the container tool from the KILN_CONTAINER_TOOL environment variable.
pub fn get_tool_from_env() -> Option<String> {
    env::var("KILN_CONTAINER_TOOL").ok()
}
