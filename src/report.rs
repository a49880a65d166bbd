//! Evaluation report.
//!
//! A [`Report`] is the aggregate output of one evaluation run: the ordered
//! check results, summary counts, and a generation timestamp. It is built
//! once and never mutated afterward; the [`Verdict`] is derived from the
//! summary on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checks::{CheckResult, CheckStatus};

/// Counts of each status across all checks in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of passing checks.
    pub ok: usize,
    /// Number of checks with recoverable issues.
    pub warnings: usize,
    /// Number of failing checks.
    pub errors: usize,
}

impl Summary {
    /// Total number of checks counted.
    pub fn total(&self) -> usize {
        self.ok + self.warnings + self.errors
    }
}

/// Overall health classification derived from a report's summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// No warnings or errors.
    Healthy,
    /// Warnings only.
    MinorIssues,
    /// At least one error.
    NeedsFixing,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Healthy => write!(f, "healthy"),
            Verdict::MinorIssues => write!(f, "minor-issues"),
            Verdict::NeedsFixing => write!(f, "needs-fixing"),
        }
    }
}

/// Aggregate output of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Check results in registration order.
    pub checks: Vec<CheckResult>,

    /// Status counts across all checks.
    pub summary: Summary,

    /// When this report was generated.
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// Build a report from check results, counting statuses and stamping
    /// the current time.
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let mut summary = Summary::default();
        for check in &checks {
            match check.status {
                CheckStatus::Ok => summary.ok += 1,
                CheckStatus::Warning => summary.warnings += 1,
                CheckStatus::Error => summary.errors += 1,
            }
        }

        Self {
            checks,
            summary,
            timestamp: Utc::now(),
        }
    }

    /// Derive the overall verdict: any error wins, then any warning.
    pub fn verdict(&self) -> Verdict {
        if self.summary.errors > 0 {
            Verdict::NeedsFixing
        } else if self.summary.warnings > 0 {
            Verdict::MinorIssues
        } else {
            Verdict::Healthy
        }
    }
}
