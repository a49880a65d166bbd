//! Installed dependency tree check.

use std::time::Duration;

use crate::shell::{self, CommandOutcome};

use super::{Check, CheckContext, CheckResult};

/// Checks that the package manager considers the dependency tree intact.
///
/// Runs the configured list command (`npm ls --depth=0` by default) in the
/// project root and looks only at the exit status. A failure is always a
/// warning, never an error: a broken tree is recoverable by reinstalling.
pub struct DependencyCheck {
    command: String,
    timeout: Duration,
}

impl DependencyCheck {
    /// Create a check running `command` bounded by `timeout`.
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    fn warning_message() -> &'static str {
        "Some dependencies may be missing. Run npm install to ensure all packages are installed."
    }
}

impl Check for DependencyCheck {
    fn name(&self) -> &str {
        "Dependencies"
    }

    fn description(&self) -> &str {
        "Package manager reports an intact dependency tree"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        match shell::run_with_timeout(&self.command, ctx.project_root(), self.timeout) {
            Ok(outcome) if outcome.success() => CheckResult::ok(
                self.name(),
                "All dependencies are properly installed",
            ),
            Ok(CommandOutcome::TimedOut) => {
                tracing::debug!(command = %self.command, "dependency listing timed out");
                CheckResult::warning(self.name(), Self::warning_message())
            }
            Ok(outcome) => {
                tracing::debug!(command = %self.command, ?outcome, "dependency listing failed");
                CheckResult::warning(self.name(), Self::warning_message())
            }
            Err(e) => {
                tracing::debug!(command = %self.command, error = %e, "dependency listing could not run");
                CheckResult::warning(self.name(), Self::warning_message())
            }
        }
    }
}
