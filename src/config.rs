//! Checker configuration.
//!
//! [`CheckerConfig`] describes what a run inspects: the project root, the
//! minimum runtime version, and the lists of files, environment variables,
//! and ports the checks look at. It is supplied at construction and
//! read-only for the lifetime of a run. The defaults mirror a standard
//! Local Loop frontend checkout.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Minimum Node.js version a Local Loop project supports.
pub const DEFAULT_MIN_NODE_VERSION: &str = "v14.0.0";

/// Files every project checkout is expected to contain.
pub const DEFAULT_REQUIRED_FILES: &[&str] = &["package.json", "tsconfig.json", ".env"];

/// Environment variables the dev server reads at startup.
pub const DEFAULT_REQUIRED_ENV_VARS: &[&str] = &["NODE_ENV", "PORT", "LOCAL_LOOP_CONFIG"];

/// Ports the dev server and its sidecars bind.
pub const DEFAULT_PORTS: &[u16] = &[3000, 8080, 4000];

/// Command used to verify the installed dependency tree.
pub const DEFAULT_LIST_COMMAND: &str = "npm ls --depth=0";

/// How long the dependency-list subprocess may run before it is killed.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;

/// Configuration for one evaluation run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Directory the file and dependency checks inspect.
    pub project_root: PathBuf,

    /// Minimum acceptable Node.js version (leading `v` optional).
    pub min_runtime_version: String,

    /// Files that must exist relative to the project root.
    pub required_files: Vec<String>,

    /// Environment variables that must be set (and non-empty).
    pub required_env_vars: Vec<String>,

    /// Candidate ports reported by the port check.
    pub ports: Vec<u16>,

    /// Shell command whose exit status decides the dependency check.
    pub list_command: String,

    /// Upper bound on the dependency-list subprocess runtime.
    pub command_timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::for_root(std::env::current_dir().unwrap_or_default())
    }
}

impl CheckerConfig {
    /// Create a config with default check lists for the given project root.
    pub fn for_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            min_runtime_version: DEFAULT_MIN_NODE_VERSION.to_string(),
            required_files: DEFAULT_REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
            required_env_vars: DEFAULT_REQUIRED_ENV_VARS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ports: DEFAULT_PORTS.to_vec(),
            list_command: DEFAULT_LIST_COMMAND.to_string(),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Replace the required file list.
    pub fn with_required_files(mut self, files: Vec<String>) -> Self {
        self.required_files = files;
        self
    }

    /// Replace the required environment variable list.
    pub fn with_required_env_vars(mut self, vars: Vec<String>) -> Self {
        self.required_env_vars = vars;
        self
    }

    /// Replace the candidate port list.
    pub fn with_ports(mut self, ports: Vec<u16>) -> Self {
        self.ports = ports;
        self
    }

    /// Replace the minimum runtime version.
    pub fn with_min_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.min_runtime_version = version.into();
        self
    }

    /// Replace the dependency-list command.
    pub fn with_list_command(mut self, command: impl Into<String>) -> Self {
        self.list_command = command.into();
        self
    }

    /// Replace the subprocess timeout.
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }
}
