//! Per-run inspection context.
//!
//! Checks do not read process-global state directly. A [`CheckContext`] is
//! built once per run and carries the project root, a snapshot of the
//! environment variables, and the probed runtime version. Tests construct
//! contexts with synthetic values instead of mutating the real process
//! environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::CheckerConfig;
use crate::shell;

use super::version;

/// Command used to probe the installed Node.js version.
const NODE_VERSION_COMMAND: &str = "node --version";

/// Snapshot of everything checks read during one run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    project_root: PathBuf,
    env: HashMap<String, String>,
    runtime_version: Option<String>,
}

impl CheckContext {
    /// Build a context from explicit values. Used by tests and embedders.
    pub fn new(
        project_root: impl Into<PathBuf>,
        env: HashMap<String, String>,
        runtime_version: Option<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            env,
            runtime_version,
        }
    }

    /// Build a context by inspecting the real process environment.
    ///
    /// Snapshots all environment variables and probes `node --version`.
    /// A failed probe leaves the runtime version unset; the version check
    /// downgrades that to a warning rather than failing the run.
    pub fn detect(config: &CheckerConfig) -> Self {
        let runtime_version = shell::capture_stdout(NODE_VERSION_COMMAND)
            .as_deref()
            .and_then(version::extract_version)
            .map(|v| format!("v{}", v));

        if runtime_version.is_none() {
            tracing::debug!("node version probe failed ({})", NODE_VERSION_COMMAND);
        }

        Self {
            project_root: config.project_root.clone(),
            env: std::env::vars().collect(),
            runtime_version,
        }
    }

    /// The directory file-based checks resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Look up a variable in the environment snapshot.
    pub fn env_var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// The probed runtime version (e.g. `"v22.1.0"`), if determinable.
    pub fn runtime_version(&self) -> Option<&str> {
        self.runtime_version.as_deref()
    }
}
