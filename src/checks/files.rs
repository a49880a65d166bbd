//! Required configuration files check.

use super::{Check, CheckContext, CheckResult};

/// Checks that every required file exists relative to the project root.
///
/// Missing files are an error: the project cannot run without them. The
/// message lists every missing name, in configuration order.
pub struct RequiredFilesCheck {
    files: Vec<String>,
}

impl RequiredFilesCheck {
    /// Create a check for the given file list.
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }
}

impl Check for RequiredFilesCheck {
    fn name(&self) -> &str {
        "Required Files"
    }

    fn description(&self) -> &str {
        "Required configuration files exist in the project root"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let missing: Vec<&str> = self
            .files
            .iter()
            .filter(|f| !ctx.project_root().join(f.as_str()).exists())
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            CheckResult::ok(
                self.name(),
                "All required configuration files are present",
            )
        } else {
            CheckResult::error(
                self.name(),
                format!("Missing required files: {}", missing.join(", ")),
            )
        }
    }
}
