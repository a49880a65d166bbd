//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//! - The theme, status icons, and the report renderer
//!
//! # Example
//!
//! ```
//! use loopcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.show_header("Local Loop Status Check");
//! ui.success("All dependencies are properly installed");
//! ```

pub mod icons;
pub mod mock;
pub mod render;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use render::render_report;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LoopTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-check lines plus run context.
    Verbose,
    /// Show per-check lines, summary, and verdict.
    #[default]
    Normal,
    /// Show only the summary and verdict.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows individual check lines.
    pub fn shows_checks(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows run context (project root, probe detail).
    pub fn shows_context(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests via [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_mode_shows_checks() {
        assert!(OutputMode::Normal.shows_checks());
        assert!(OutputMode::Verbose.shows_checks());
        assert!(!OutputMode::Quiet.shows_checks());
    }

    #[test]
    fn only_verbose_shows_context() {
        assert!(OutputMode::Verbose.shows_context());
        assert!(!OutputMode::Normal.shows_context());
        assert!(!OutputMode::Quiet.shows_context());
    }

    #[test]
    fn create_ui_returns_terminal_ui() {
        let ui = create_ui(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
