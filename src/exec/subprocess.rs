//! Subprocess execution

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, -1 when terminated by a signal
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            duration,
        }
    }
}

/// Run a command in `cwd` with inherited stdio and wait for it to finish
pub fn run_command(program: &str, args: &[String], cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();
    debug!(program, ?args, cwd = %cwd.display(), "spawning");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program))?;

    let result = CommandResult::from_status(status, start.elapsed());
    debug!(program, exit_code = result.exit_code, elapsed = ?result.duration, "finished");
    Ok(result)
}
