//! Report rendering.
//!
//! Turns a [`Report`] into the standard console layout: one line per
//! check, a summary line, and an overall verdict line. All output goes
//! through the [`UserInterface`] trait so tests can capture it.

use crate::checks::{CheckResult, CheckStatus};
use crate::report::{Report, Verdict};

use super::{StatusKind, UserInterface};

/// Print a single check's result line, routed by severity.
pub fn show_check_result(ui: &mut dyn UserInterface, check: &CheckResult) {
    let kind = StatusKind::from(check.status);
    let line = kind.format(&format!("{}: {}", check.name, check.message));
    match check.status {
        CheckStatus::Ok => ui.success(&line),
        CheckStatus::Warning => ui.warning(&line),
        CheckStatus::Error => ui.error(&line),
    }
}

/// Print the overall verdict line for a report.
pub fn show_verdict(ui: &mut dyn UserInterface, verdict: Verdict) {
    match verdict {
        Verdict::Healthy => ui.success("Your environment is properly configured!"),
        Verdict::MinorIssues => ui.warning("Your environment has some minor issues."),
        Verdict::NeedsFixing => ui.error("Your environment has issues that need to be fixed."),
    }
}

/// Render a full report: check lines, summary, verdict.
///
/// In quiet mode the per-check lines are suppressed and only the summary
/// and verdict are printed.
pub fn render_report(ui: &mut dyn UserInterface, report: &Report) {
    if ui.output_mode().shows_checks() {
        for check in &report.checks {
            show_check_result(ui, check);
        }
        ui.message("");
    }

    ui.message(&format!(
        "Summary: {} passed, {} warnings, {} errors",
        report.summary.ok, report.summary.warnings, report.summary.errors
    ));
    show_verdict(ui, report.verdict());
}
