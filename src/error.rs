//! Error types for readiness checks.
//!
//! This module defines [`ValidateError`], the error type used by the shell
//! and checks layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes return `ValidateError` internally and propagate it with `?`
//! - The check boundary collapses every error into a boolean outcome plus
//!   a printed line, so none of these reach the process exit path
//! - The one error that does reach `main`, a failed report write, travels
//!   as `anyhow::Error` with context attached
//! - Messages are shown to users verbatim in warning lines

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readiness checks.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The external program could not be started.
    #[error("Could not run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program did not finish before its deadline.
    #[error("Command '{command}' timed out after {seconds} seconds")]
    CommandTimeout { command: String, seconds: u64 },

    /// The external program exited unsuccessfully.
    #[error("Command '{command}' returned non-zero exit status {}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (searched: {})", display_paths(.searched))]
    InterpreterNotFound { searched: Vec<PathBuf> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "PATH is empty".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for readiness checks.
pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_displays_command_and_seconds() {
        let err = ValidateError::CommandTimeout {
            command: "jupyter kernelspec list".into(),
            seconds: 10,
        };
        assert_eq!(
            err.to_string(),
            "Command 'jupyter kernelspec list' timed out after 10 seconds"
        );
    }

    #[test]
    fn spawn_error_displays_command_and_cause() {
        let err = ValidateError::CommandSpawn {
            command: "jupyter kernelspec list".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("jupyter kernelspec list"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn command_failed_displays_code() {
        let err = ValidateError::CommandFailed {
            command: "jupyter kernelspec list".into(),
            code: Some(2),
        };
        assert!(err.to_string().ends_with("exit status 2"));
    }

    #[test]
    fn command_failed_without_code_mentions_signal() {
        let err = ValidateError::CommandFailed {
            command: "python3".into(),
            code: None,
        };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn interpreter_not_found_lists_searched_paths() {
        let err = ValidateError::InterpreterNotFound {
            searched: vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/bin")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin"));
        assert!(msg.contains("/opt/bin"));
    }

    #[test]
    fn interpreter_not_found_with_empty_path() {
        let err = ValidateError::InterpreterNotFound { searched: vec![] };
        assert!(err.to_string().contains("PATH is empty"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ValidateError = io_err.into();
        assert!(matches!(err, ValidateError::Io(_)));
    }
}
