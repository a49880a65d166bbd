//! Environment checks.
//!
//! This module provides the core types for defining checks:
//!
//! - [`Check`] - the trait every check implements
//! - [`CheckStatus`] / [`CheckResult`] - the tri-state verdict a check yields
//! - [`CheckRegistry`] - the ordered battery of checks for one run
//!
//! Checks are independent: each reads the [`CheckContext`] and the
//! filesystem, shares no state with its siblings, and converts its own
//! inspection failures into a `warning` or `error` result rather than
//! propagating them.

pub mod context;
pub mod dependencies;
pub mod env_vars;
pub mod files;
pub mod ports;
pub mod runtime;
pub mod version;

pub use context::CheckContext;
pub use dependencies::DependencyCheck;
pub use env_vars::EnvVarCheck;
pub use files::RequiredFilesCheck;
pub use ports::PortAvailabilityCheck;
pub use runtime::RuntimeVersionCheck;

use serde::{Deserialize, Serialize};

use crate::config::CheckerConfig;

/// Tri-state verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The aspect under inspection is correctly set up.
    Ok,
    /// Something is off but recoverable by user action.
    Warning,
    /// Something is missing or incompatible and needs fixing.
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "ok"),
            CheckStatus::Warning => write!(f, "warning"),
            CheckStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of one check. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display name of the check that produced this result.
    pub name: String,

    /// Tri-state verdict.
    pub status: CheckStatus,

    /// Human-readable explanation.
    pub message: String,
}

impl CheckResult {
    /// Create a passing result.
    pub fn ok(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    /// Create a warning result.
    pub fn warning(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    /// Create an error result.
    pub fn error(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.into(),
        }
    }
}

/// A single independent inspection of one aspect of the local environment.
pub trait Check {
    /// Display name, used as the result name and in `loopcheck list`.
    fn name(&self) -> &str;

    /// One-line description of what this check inspects.
    fn description(&self) -> &str;

    /// Run the inspection. Must not panic; inspection failures become
    /// `warning` or `error` results.
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// Ordered battery of checks for one evaluation run.
///
/// Iteration order is registration order; the report preserves it.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the standard battery, configured from `config`.
    pub fn from_config(config: &CheckerConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RuntimeVersionCheck::new(
            &config.min_runtime_version,
        )));
        registry.register(Box::new(RequiredFilesCheck::new(
            config.required_files.clone(),
        )));
        registry.register(Box::new(DependencyCheck::new(
            &config.list_command,
            config.command_timeout,
        )));
        registry.register(Box::new(PortAvailabilityCheck::new(config.ports.clone())));
        registry.register(Box::new(EnvVarCheck::new(
            config.required_env_vars.clone(),
        )));
        registry
    }

    /// Register a check at the end of the battery.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Iterate over checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
