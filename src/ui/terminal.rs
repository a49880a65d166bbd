//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LoopTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status messages go to stdout; errors go to stderr so they survive
/// piping the report elsewhere.
pub struct TerminalUI {
    term: Term,
    theme: LoopTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LoopTheme::new()
        } else {
            LoopTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> &LoopTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.success.apply_to(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.warning.apply_to(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_its_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn terminal_ui_writes_without_panic() {
        let mut ui = TerminalUI::new(OutputMode::Normal);
        ui.message("message");
        ui.success("success");
        ui.warning("warning");
        ui.show_header("header");
    }
}
