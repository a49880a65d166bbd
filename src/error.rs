//! Error types for loopcheck operations.
//!
//! This module defines [`LoopcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Individual checks never surface errors through this type: a check that
//! cannot complete its own inspection downgrades to a `warning` or `error`
//! check result instead. `LoopcheckError` exists for the CLI plumbing
//! around the evaluation (bad paths, subprocess spawn failures).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for loopcheck operations.
#[derive(Debug, Error)]
pub enum LoopcheckError {
    /// Project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// Invalid configuration value supplied on the command line.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Shell command could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for loopcheck operations.
pub type Result<T> = std::result::Result<T, LoopcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_not_found_displays_path() {
        let err = LoopcheckError::ProjectRootNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn invalid_config_displays_message() {
        let err = LoopcheckError::InvalidConfig {
            message: "empty file list".into(),
        };
        assert!(err.to_string().contains("empty file list"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = LoopcheckError::CommandFailed {
            command: "npm ls --depth=0".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm ls --depth=0"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LoopcheckError = io_err.into();
        assert!(matches!(err, LoopcheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LoopcheckError::InvalidConfig {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
