//! Status evaluation.
//!
//! The [`Evaluator`] runs a registry's checks against a context, in
//! registration order, and aggregates the results into a [`Report`]. It
//! has no failure path of its own: every check converts its inspection
//! failures into a result, so a run always produces a complete report.

use crate::checks::{CheckContext, CheckRegistry};
use crate::config::CheckerConfig;
use crate::report::Report;

/// Runs a battery of checks and aggregates the results.
pub struct Evaluator {
    registry: CheckRegistry,
}

impl Evaluator {
    /// Create an evaluator over an explicit registry.
    pub fn new(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    /// Create an evaluator with the standard battery from `config`.
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(CheckRegistry::from_config(config))
    }

    /// Run every registered check against `ctx`, in registration order.
    pub fn run(&self, ctx: &CheckContext) -> Report {
        let results = self
            .registry
            .iter()
            .map(|check| {
                tracing::debug!(check = check.name(), "running check");
                check.run(ctx)
            })
            .collect();

        Report::from_checks(results)
    }
}

/// Evaluate the real local environment described by `config`.
///
/// Builds the standard battery and a detected context (environment
/// snapshot plus runtime probe), then runs everything.
pub fn evaluate(config: &CheckerConfig) -> Report {
    Evaluator::from_config(config).run(&CheckContext::detect(config))
}
