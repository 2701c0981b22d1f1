//! Runtime settings for a readiness run.
//!
//! [`ValidatorConfig`] is the resolved form of the command-line flags. The
//! checklist and kernel name are constants in [`crate::checks`] and are not
//! part of it.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Default deadline for `jupyter kernelspec list`.
pub const DEFAULT_KERNEL_TIMEOUT: Duration = Duration::from_secs(10);

/// Default deadline for a single package import.
pub const DEFAULT_IMPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Interpreter override; `None` means discover one.
    pub python: Option<PathBuf>,
    /// Program used to list kernels.
    pub jupyter: PathBuf,
    pub kernel_timeout: Duration,
    pub import_timeout: Duration,
    /// Whether the report may use colour.
    pub color: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            python: None,
            jupyter: PathBuf::from("jupyter"),
            kernel_timeout: DEFAULT_KERNEL_TIMEOUT,
            import_timeout: DEFAULT_IMPORT_TIMEOUT,
            color: true,
        }
    }
}

impl From<&Cli> for ValidatorConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            python: cli.python.clone(),
            jupyter: cli.jupyter.clone(),
            kernel_timeout: Duration::from_secs(cli.kernel_timeout),
            import_timeout: Duration::from_secs(cli.import_timeout),
            color: !cli.no_color,
        }
    }
}
