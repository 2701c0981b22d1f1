//! Report writer.
//!
//! [`Reporter`] owns the exact text layout of a readiness run: banners,
//! one line per check and the closing guide. It writes to any
//! [`std::io::Write`], which keeps the layout testable without a terminal.

use std::io::{self, Write};

use super::hints::{self, GuideStep};
use super::icons::StatusKind;
use super::theme::ReportTheme;
use crate::checks::{KernelCheck, PackageCheck};

/// Width of the `=` and `-` rules.
pub const RULE_WIDTH: usize = 60;

/// Title printed inside the opening banner.
pub const TITLE: &str = "Movie Recommendation System - Setup Validation";

/// Writes report lines to an output stream.
pub struct Reporter<W: Write> {
    out: W,
    theme: ReportTheme,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, theme: ReportTheme) -> Self {
        Self { out, theme }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Opening banner: rule, title, rule, blank line.
    pub fn banner(&mut self) -> io::Result<()> {
        self.heavy_rule()?;
        writeln!(self.out, "{}", self.theme.header.apply_to(TITLE))?;
        self.heavy_rule()?;
        writeln!(self.out)
    }

    /// Section title followed by a light rule.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title)?;
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", self.theme.dim.apply_to(rule))
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn heavy_rule(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", self.theme.dim.apply_to(rule))
    }

    pub fn package(&mut self, check: &PackageCheck) -> io::Result<()> {
        let msg = if check.installed {
            format!("{} is installed", check.display_name)
        } else {
            format!("{} is NOT installed", check.display_name)
        };
        self.status(StatusKind::from(check.installed), &msg)
    }

    /// Kernel result: success, not-registered warning with setup hint, or
    /// listing-failed warning with the captured message.
    pub fn kernel(&mut self, check: &KernelCheck, expected_name: &str) -> io::Result<()> {
        if check.found {
            self.status(
                StatusKind::Success,
                &format!("Jupyter kernel '{}' is installed", expected_name),
            )
        } else if check.listed {
            self.status(
                StatusKind::Warning,
                &format!("Jupyter kernel '{}' is NOT found", expected_name),
            )?;
            writeln!(self.out, "   {}", hints::KERNEL_SETUP_HINT)
        } else {
            self.status(
                StatusKind::Warning,
                &format!("Could not check Jupyter kernel: {}", check.raw_output_or_error),
            )
        }
    }

    /// Closing block when every check passed.
    pub fn all_passed(&mut self) -> io::Result<()> {
        self.status(StatusKind::Success, "All checks passed! Setup is complete.")?;
        writeln!(self.out)?;
        writeln!(self.out, "Next steps:")?;
        self.guide(&hints::next_steps())
    }

    /// Closing block when any check failed.
    pub fn some_failed(&mut self) -> io::Result<()> {
        self.status(
            StatusKind::Failed,
            "Some checks failed. Please install missing packages.",
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "To fix:")?;
        self.guide(&hints::remediation_steps())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn status(&mut self, kind: StatusKind, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", kind.format(&self.theme, msg))
    }

    fn guide(&mut self, steps: &[GuideStep]) -> io::Result<()> {
        for (idx, step) in steps.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, step.title)?;
            for detail in &step.details {
                writeln!(self.out, "   {}", self.theme.command.apply_to(detail))?;
            }
        }
        Ok(())
    }
}
