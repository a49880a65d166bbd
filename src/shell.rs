//! Bounded shell command execution.
//!
//! The dependency check shells out to the package manager; the runtime
//! probe shells out to `node`. Both go through here so every external call
//! is synchronous and bounded: [`run_with_timeout`] polls the child and
//! kills it once the deadline passes instead of waiting forever.

use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{LoopcheckError, Result};

/// How often the child is polled while waiting for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of a bounded command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited within the deadline.
    Completed {
        /// Exit code (None if killed by signal).
        exit_code: Option<i32>,
        /// Whether the exit status was zero.
        success: bool,
    },
    /// The command was killed after exceeding the deadline.
    TimedOut,
}

impl CommandOutcome {
    /// Whether the command ran to completion with a zero exit status.
    pub fn success(&self) -> bool {
        matches!(
            self,
            CommandOutcome::Completed { success: true, .. }
        )
    }
}

/// Build a command that runs `command` through the platform shell.
fn shell_command(command: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Run a shell command in `cwd`, discarding output, bounded by `timeout`.
///
/// Returns an error only when the child cannot be spawned or polled; a
/// non-zero exit or a timeout is a normal [`CommandOutcome`].
pub fn run_with_timeout(command: &str, cwd: &Path, timeout: Duration) -> Result<CommandOutcome> {
    let mut child = shell_command(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| LoopcheckError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(CommandOutcome::Completed {
                exit_code: status.code(),
                success: status.success(),
            });
        }

        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!(command, ?timeout, "command killed after deadline");
            return Ok(CommandOutcome::TimedOut);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Run a shell command and capture trimmed stdout on success.
///
/// Returns `None` when the command cannot be spawned, exits non-zero, or
/// produces no output.
pub fn capture_stdout(command: &str) -> Option<String> {
    let output = shell_command(command)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}
