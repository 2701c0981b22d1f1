//! Package presence probing.
//!
//! A package counts as installed when the project's interpreter can import
//! it. Nothing is installed, upgraded or version-checked here.

use crate::checks::interpreter::locate_python;
use crate::error::{Result, ValidateError};
use crate::shell::{execute_checked, CommandSpec};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Inline program run by the interpreter; the module name arrives as `argv[1]`.
const IMPORT_PROGRAM: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// A package to look for: the name users know and the name it imports as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// Name shown in the report (e.g., "scikit-learn").
    pub display_name: &'static str,
    /// Module name passed to the import probe (e.g., "sklearn").
    pub probe_name: &'static str,
}

impl Package {
    /// A package whose import name matches its display name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            display_name: name,
            probe_name: name,
        }
    }

    /// A package that imports under a different name.
    pub const fn aliased(display_name: &'static str, probe_name: &'static str) -> Self {
        Self {
            display_name,
            probe_name,
        }
    }
}

/// The outcome of probing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCheck {
    pub display_name: String,
    pub probe_name: String,
    pub installed: bool,
}

/// Resolves a module name against some environment.
///
/// Any `Err` means the module is absent; the caller never sees it escape.
pub trait PackageResolver {
    fn resolve(&self, probe_name: &str) -> Result<()>;
}

/// Resolves modules by importing them in a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonResolver {
    interpreter: Option<PathBuf>,
    /// Directories searched when discovery came up empty.
    searched: Vec<PathBuf>,
    timeout: Duration,
}

impl PythonResolver {
    /// Use an interpreter found by [`locate_python`].
    ///
    /// A failed lookup is remembered rather than returned, so every package
    /// is then reported absent.
    pub fn discover(explicit: Option<&Path>, timeout: Duration) -> Self {
        match locate_python(explicit) {
            Ok(path) => Self::with_interpreter(path, timeout),
            Err(e) => {
                tracing::debug!("{}", e);
                let searched = match e {
                    ValidateError::InterpreterNotFound { searched } => searched,
                    _ => Vec::new(),
                };
                Self {
                    interpreter: None,
                    searched,
                    timeout,
                }
            }
        }
    }

    /// Use a specific interpreter.
    pub fn with_interpreter(interpreter: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            interpreter: Some(interpreter.into()),
            searched: Vec::new(),
            timeout,
        }
    }

    /// The interpreter probes run in, if one was found.
    pub fn interpreter(&self) -> Option<&Path> {
        self.interpreter.as_deref()
    }
}

impl PackageResolver for PythonResolver {
    fn resolve(&self, probe_name: &str) -> Result<()> {
        let interpreter = self
            .interpreter
            .as_ref()
            .ok_or_else(|| ValidateError::InterpreterNotFound {
                searched: self.searched.clone(),
            })?;

        let spec = CommandSpec::new(interpreter)
            .arg("-c")
            .arg(IMPORT_PROGRAM)
            .arg(probe_name);
        execute_checked(&spec, self.timeout)?;
        Ok(())
    }
}

/// Probe one package, converting any resolution failure into `installed: false`.
pub fn probe_package<R>(resolver: &R, display_name: &str, probe_name: Option<&str>) -> PackageCheck
where
    R: PackageResolver + ?Sized,
{
    let probe_name = probe_name.unwrap_or(display_name);
    let installed = match resolver.resolve(probe_name) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("'{}' did not resolve: {}", probe_name, e);
            false
        }
    };
    PackageCheck {
        display_name: display_name.to_string(),
        probe_name: probe_name.to_string(),
        installed,
    }
}
