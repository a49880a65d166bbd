//! Visual theme and styling.

use console::Style;

/// Loopcheck's visual theme.
#[derive(Debug, Clone)]
pub struct LoopTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for LoopTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🔍"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_header() {
        let theme = LoopTheme::plain();
        let msg = theme.format_header("Status Check");
        assert!(msg.contains("Status Check"));
    }

    #[test]
    fn plain_theme_creates_without_panic() {
        let theme = LoopTheme::plain();
        let _ = theme.success.apply_to("test");
        let _ = theme.warning.apply_to("test");
        let _ = theme.error.apply_to("test");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = LoopTheme::default();
        let new = LoopTheme::new();
        assert_eq!(
            default.format_header("t"),
            new.format_header("t")
        );
    }
}
