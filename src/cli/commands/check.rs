//! Check command implementation.
//!
//! The `loopcheck check` command runs the full check battery against the
//! project root and renders the report, either as the console layout or
//! as JSON.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checks::CheckContext;
use crate::cli::args::CheckArgs;
use crate::config::CheckerConfig;
use crate::error::{LoopcheckError, Result};
use crate::evaluator::Evaluator;
use crate::ui::{render_report, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build the run configuration from defaults plus CLI overrides.
    fn build_config(&self) -> CheckerConfig {
        let mut config = CheckerConfig::for_root(&self.project_root);

        if !self.args.files.is_empty() {
            config = config.with_required_files(self.args.files.clone());
        }
        if !self.args.env_vars.is_empty() {
            config = config.with_required_env_vars(self.args.env_vars.clone());
        }
        if !self.args.ports.is_empty() {
            config = config.with_ports(self.args.ports.clone());
        }
        if let Some(version) = &self.args.min_version {
            config = config.with_min_runtime_version(version.clone());
        }
        if let Some(secs) = self.args.timeout {
            config = config.with_command_timeout(Duration::from_secs(secs));
        }

        config
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.timeout == Some(0) {
            return Err(LoopcheckError::InvalidConfig {
                message: "--timeout must be at least 1 second".to_string(),
            });
        }

        if !self.project_root.is_dir() {
            let err = LoopcheckError::ProjectRootNotFound {
                path: self.project_root.clone(),
            };
            ui.error(&err.to_string());
            return Ok(CommandResult::failure(2));
        }

        let config = self.build_config();
        let ctx = CheckContext::detect(&config);

        if !self.args.json {
            ui.show_header("Local Loop Status Check");
            if ui.output_mode().shows_context() {
                ui.message(&format!("Project root: {}", self.project_root.display()));
                ui.message("");
            }
        }

        let report = Evaluator::from_config(&config).run(&ctx);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| LoopcheckError::Other(e.into()))?;
            ui.message(&json);
        } else {
            render_report(ui, &report);
        }

        // The tool is informational: a completed run succeeds regardless
        // of the verdict.
        Ok(CommandResult::success())
    }
}
