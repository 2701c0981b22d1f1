//! Python interpreter discovery.
//!
//! Package probes run inside the project's interpreter, so finding the right
//! one matters more than finding any one. An active virtual environment wins
//! over whatever happens to be first on `PATH`, which is the same order a
//! shell with the venv activated would pick.
//!
//! # Example
//!
//! ```no_run
//! use movierec_validate::checks::interpreter::locate_python;
//!
//! match locate_python(None) {
//!     Ok(python) => println!("Using {}", python.display()),
//!     Err(e) => println!("{}", e),
//! }
//! ```

use crate::error::{Result, ValidateError};
use std::path::{Path, PathBuf};

/// Interpreter names tried on `PATH`, in order.
#[cfg(not(windows))]
const PATH_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PATH_CANDIDATES: &[&str] = &["python.exe", "python3.exe"];

/// Interpreter location inside a virtual environment.
#[cfg(not(windows))]
const VENV_SUBPATH: &str = "bin/python";
#[cfg(windows)]
const VENV_SUBPATH: &str = "Scripts/python.exe";

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate the Python interpreter using the real environment.
///
/// An explicit override is returned as-is; it is the caller's choice and a
/// bad one surfaces as failed package probes.
pub fn locate_python(explicit: Option<&Path>) -> Result<PathBuf> {
    locate_python_with_env(explicit, &parse_system_path(), |key: &str| {
        std::env::var(key)
    })
}

/// Locate the Python interpreter with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn locate_python_with_env<F>(
    explicit: Option<&Path>,
    path_entries: &[PathBuf],
    env_fn: F,
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(venv) = env_fn("VIRTUAL_ENV") {
        let candidate = PathBuf::from(venv).join(VENV_SUBPATH);
        if candidate.is_file() && is_executable(&candidate) {
            tracing::debug!("Using virtualenv interpreter {}", candidate.display());
            return Ok(candidate);
        }
        tracing::debug!(
            "VIRTUAL_ENV set but {} is not executable",
            candidate.display()
        );
    }

    for name in PATH_CANDIDATES {
        if let Some(found) = resolve_tool_path(name, path_entries) {
            tracing::debug!("Using interpreter {} from PATH", found.display());
            return Ok(found);
        }
    }

    Err(ValidateError::InterpreterNotFound {
        searched: path_entries.to_vec(),
    })
}
