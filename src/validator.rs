//! The readiness run.
//!
//! [`Validator`] wires a package resolver, a kernel lister and a report
//! writer together and runs the fixed sequence: banner, package checks,
//! kernel check, closing guide. The exit code is the only result; every
//! probe failure has already been turned into a report line by then.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;

use crate::checks::{
    probe_kernel, probe_package, JupyterLister, KernelLister, PackageResolver, PythonResolver,
    KERNEL_NAME, REQUIRED_PACKAGES,
};
use crate::config::ValidatorConfig;
use crate::ui::{ReportTheme, Reporter};

/// Aggregate result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub all_installed: bool,
    pub kernel_installed: bool,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.all_installed && self.kernel_installed
    }

    /// 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Runs the checklist against a resolver and lister, reporting to `out`.
pub struct Validator<R, L, W: Write> {
    resolver: R,
    lister: L,
    reporter: Reporter<W>,
    kernel_timeout: Duration,
}

impl<W: Write> Validator<PythonResolver, JupyterLister, W> {
    /// Build a validator that probes the real environment.
    pub fn from_config(config: &ValidatorConfig, out: W, theme: ReportTheme) -> Self {
        let resolver = PythonResolver::discover(config.python.as_deref(), config.import_timeout);
        let lister = JupyterLister::new(&config.jupyter);
        Self::new(resolver, lister, Reporter::new(out, theme), config.kernel_timeout)
    }
}

/// Run against the real environment, writing the report to `out`.
///
/// The only failure is being unable to write the report.
pub fn run_report<W: Write>(
    config: &ValidatorConfig,
    out: W,
    theme: ReportTheme,
) -> anyhow::Result<Outcome> {
    Validator::from_config(config, out, theme)
        .run()
        .context("Failed to write validation report")
}

impl<R, L, W> Validator<R, L, W>
where
    R: PackageResolver,
    L: KernelLister,
    W: Write,
{
    pub fn new(resolver: R, lister: L, reporter: Reporter<W>, kernel_timeout: Duration) -> Self {
        Self {
            resolver,
            lister,
            reporter,
            kernel_timeout,
        }
    }

    /// Probe one package and print its line.
    pub fn check_package(&mut self, display_name: &str, probe_name: Option<&str>) -> io::Result<bool> {
        let check = probe_package(&self.resolver, display_name, probe_name);
        self.reporter.package(&check)?;
        Ok(check.installed)
    }

    /// Look for `expected_name` in the kernel listing and print the result.
    pub fn check_kernel_registration(
        &mut self,
        expected_name: &str,
        timeout: Duration,
    ) -> io::Result<bool> {
        let check = probe_kernel(&self.lister, expected_name, timeout);
        self.reporter.kernel(&check, expected_name)?;
        Ok(check.found)
    }

    /// Run the full sequence.
    ///
    /// Only a failure to write the report is returned as an error.
    pub fn run(&mut self) -> io::Result<Outcome> {
        self.reporter.banner()?;

        self.reporter.section("Checking required packages...")?;
        let mut all_installed = true;
        for package in REQUIRED_PACKAGES {
            // Every package is probed even after a miss so the report is complete.
            let installed = self.check_package(package.display_name, Some(package.probe_name))?;
            all_installed &= installed;
        }

        self.reporter.blank()?;
        self.reporter.section("Checking Jupyter kernel...")?;
        let kernel_installed = self.check_kernel_registration(KERNEL_NAME, self.kernel_timeout)?;

        let outcome = Outcome {
            all_installed,
            kernel_installed,
        };
        tracing::debug!("Validation outcome: {:?}", outcome);

        self.reporter.blank()?;
        self.reporter.heavy_rule()?;
        if outcome.passed() {
            self.reporter.all_passed()?;
        } else {
            self.reporter.some_failed()?;
        }
        self.reporter.flush()?;

        Ok(outcome)
    }

    /// Consume the validator and return the report writer.
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}
