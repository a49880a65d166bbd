//! List command implementation.
//!
//! The `loopcheck list` command prints the registered checks and what
//! each one inspects, in the order they run.

use crate::checks::CheckRegistry;
use crate::cli::args::ListArgs;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    #[allow(dead_code)]
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // The default config is only used for check construction; the
        // lists themselves are irrelevant to names and descriptions.
        let registry = CheckRegistry::from_config(&CheckerConfig::default());

        ui.show_header("Registered checks");
        for (idx, check) in registry.iter().enumerate() {
            ui.message(&format!(
                "  {}. {} — {}",
                idx + 1,
                check.name(),
                check.description()
            ));
        }

        Ok(CommandResult::success())
    }
}
