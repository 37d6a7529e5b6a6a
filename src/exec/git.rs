//! Git operations used to fetch the template

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::ScaffoldError;
use crate::exec::subprocess::run_command;
use crate::utils::tools::require_tool;

/// Clone `url` into `dest_name`, relative to `cwd`.
///
/// Output of `git` goes straight to the terminal. Spawn failures and a
/// non-zero exit both surface as [`ScaffoldError::CloneFailed`].
pub fn clone_template(url: &str, dest_name: &str, cwd: &Path) -> Result<()> {
    let git = require_tool("git", "cloning the project template")?;
    debug!(tool = %git.name, path = %git.path.display(), version = ?git.version, "using git");

    let result = match run_command("git", &clone_args(url, dest_name), cwd) {
        Ok(result) => result,
        Err(e) => {
            return Err(ScaffoldError::clone_failed_with_source(url, "git could not be started", e).into());
        }
    };

    if !result.success {
        return Err(ScaffoldError::clone_failed(
            url,
            format!("git clone exited with code {}", result.exit_code),
        )
        .into());
    }

    Ok(())
}

/// Arguments for `git clone`; `--` keeps a URL starting with `-` from
/// being parsed as an option
fn clone_args(url: &str, dest_name: &str) -> Vec<String> {
    vec![
        "clone".to_string(),
        "--".to_string(),
        url.to_string(),
        dest_name.to_string(),
    ]
}

/// Remove the version control directory of a fresh clone.
///
/// Returns `false` when there was nothing to remove.
pub fn remove_metadata(project_root: &Path, vcs_dir: &str) -> Result<bool> {
    let path = project_root.join(vcs_dir);
    match fs::remove_dir_all(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Error removing {} directory", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clone_args_end_options() {
        assert_eq!(
            clone_args("--upload-pack=touch pwned", "shop"),
            vec!["clone", "--", "--upload-pack=touch pwned", "shop"]
        );
    }

    #[test]
    fn test_remove_metadata() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".git/objects")).unwrap();
        fs::write(temp_dir.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(temp_dir.path().join("main.go"), "package main\n").unwrap();

        assert!(remove_metadata(temp_dir.path(), ".git").unwrap());
        assert!(!temp_dir.path().join(".git").exists());
        assert!(temp_dir.path().join("main.go").exists());

        // Second call finds nothing
        assert!(!remove_metadata(temp_dir.path(), ".git").unwrap());
    }
}
