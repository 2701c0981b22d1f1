//! Notebook kernel registration probing.

use crate::error::Result;
use crate::shell::{execute_checked, CommandSpec};
use std::path::PathBuf;
use std::time::Duration;

/// The outcome of looking for a registered kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelCheck {
    /// Whether the expected identifier appeared in the listing.
    pub found: bool,
    /// The listing text on success, or the error message when listing failed.
    pub raw_output_or_error: String,
    /// Whether the listing itself could be obtained.
    pub listed: bool,
}

/// Produces the text of a "list registered kernels" call.
pub trait KernelLister {
    fn list(&self, timeout: Duration) -> Result<String>;
}

/// Lists kernels with `jupyter kernelspec list`.
#[derive(Debug, Clone)]
pub struct JupyterLister {
    program: PathBuf,
}

impl JupyterLister {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spec(&self) -> CommandSpec {
        CommandSpec::new(&self.program).arg("kernelspec").arg("list")
    }
}

impl Default for JupyterLister {
    fn default() -> Self {
        Self::new("jupyter")
    }
}

impl KernelLister for JupyterLister {
    fn list(&self, timeout: Duration) -> Result<String> {
        Ok(execute_checked(&self.spec(), timeout)?.stdout)
    }
}

/// Look for `expected_name` in the kernel listing.
///
/// Listing errors of every kind are folded into `listed: false`.
pub fn probe_kernel<L>(lister: &L, expected_name: &str, timeout: Duration) -> KernelCheck
where
    L: KernelLister + ?Sized,
{
    match lister.list(timeout) {
        Ok(output) => KernelCheck {
            found: output.contains(expected_name),
            raw_output_or_error: output,
            listed: true,
        },
        Err(e) => {
            tracing::debug!("Kernel listing failed: {:?}", e);
            KernelCheck {
                found: false,
                raw_output_or_error: e.to_string(),
                listed: false,
            }
        }
    }
}
