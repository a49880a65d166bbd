//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides the canonical icons and colors for check output,
//! with a bracketed text form for non-TTY contexts.

use crate::checks::CheckStatus;

use super::theme::LoopTheme;

/// Canonical status kinds used across all loopcheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check found a recoverable issue.
    Warning,
    /// Check failed.
    Failed,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Warning => "[warn]",
            Self::Failed => "[FAIL]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &LoopTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: icon + message.
    pub fn format(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Ok => Self::Success,
            CheckStatus::Warning => Self::Warning,
            CheckStatus::Error => Self::Failed,
        }
    }
}
