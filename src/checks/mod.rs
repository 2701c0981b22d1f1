//! Environment readiness checks.
//!
//! # Modules
//!
//! - [`interpreter`] - Python interpreter discovery
//! - [`package`] - Package presence probing
//! - [`kernel`] - Notebook kernel registration probing

pub mod interpreter;
pub mod kernel;
pub mod package;

pub use kernel::{probe_kernel, JupyterLister, KernelCheck, KernelLister};
pub use package::{probe_package, Package, PackageCheck, PackageResolver, PythonResolver};

/// Kernel the notebook expects to be registered.
pub const KERNEL_NAME: &str = "movierec-kernel";

/// Every package the notebook imports, in report order.
pub const REQUIRED_PACKAGES: &[Package] = &[
    Package::new("pandas"),
    Package::new("numpy"),
    Package::new("matplotlib"),
    Package::new("seaborn"),
    Package::aliased("scikit-learn", "sklearn"),
    Package::new("jupyter"),
    Package::new("ipykernel"),
];
