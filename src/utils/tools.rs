//! Tool detection with actionable error messages

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use tracing::debug;
use which::which;

use crate::error::{hints, ScaffoldError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
    /// Tool version string (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    let path = which(tool_name).ok()?;
    let version = get_tool_version(tool_name);
    debug!(tool = tool_name, path = %path.display(), ?version, "tool found");

    Some(ToolInfo {
        name: tool_name.to_string(),
        path,
        version,
    })
}

/// Get tool version by running `tool --version`
fn get_tool_version(tool_name: &str) -> Option<String> {
    let output = Command::new(tool_name).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8_lossy(&output.stdout);
    Some(version.lines().next().unwrap_or("").trim().to_string())
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(ScaffoldError::missing_tool(tool_name, required_for, get_tool_hint(tool_name)).into()),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "git" => hints::git(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_missing_tool() {
        let err = require_tool("create-prabogo-no-such-tool", "testing").unwrap_err();
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::MissingTool { tool, required_for, .. }) => {
                assert_eq!(tool, "create-prabogo-no-such-tool");
                assert_eq!(required_for, "testing");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_tool_hints() {
        assert_eq!(get_tool_hint("git"), hints::git());
        assert!(get_tool_hint("unknown").contains("PATH"));
    }
}
