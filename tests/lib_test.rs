//! Integration tests for the public library API.

use std::time::Duration;

use movierec_validate::checks::{
    KernelLister, PackageResolver, KERNEL_NAME, REQUIRED_PACKAGES,
};
use movierec_validate::ui::{ReportTheme, Reporter};
use movierec_validate::{Result, ValidateError, Validator};

struct Installed(&'static [&'static str]);

impl PackageResolver for Installed {
    fn resolve(&self, probe_name: &str) -> Result<()> {
        if self.0.iter().any(|p| *p == probe_name) {
            Ok(())
        } else {
            Err(ValidateError::CommandFailed {
                command: format!("import {probe_name}"),
                code: Some(1),
            })
        }
    }
}

struct Listing(&'static str);

impl KernelLister for Listing {
    fn list(&self, _timeout: Duration) -> Result<String> {
        Ok(self.0.to_string())
    }
}

const EVERYTHING: &[&str] = &[
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "sklearn",
    "jupyter",
    "ipykernel",
];

fn run_with(resolver: Installed, lister: Listing) -> (u8, String) {
    let reporter = Reporter::new(Vec::new(), ReportTheme::plain());
    let mut validator = Validator::new(resolver, lister, reporter, Duration::from_secs(10));
    let outcome = validator.run().unwrap();
    (
        outcome.exit_code(),
        String::from_utf8(validator.into_output()).unwrap(),
    )
}

#[test]
fn probe_names_cover_the_checklist() {
    let probes: Vec<_> = REQUIRED_PACKAGES.iter().map(|p| p.probe_name).collect();
    assert_eq!(probes, EVERYTHING);
    assert_eq!(KERNEL_NAME, "movierec-kernel");
}

#[test]
fn full_environment_passes() {
    let (code, text) = run_with(Installed(EVERYTHING), Listing("movierec-kernel /k"));
    assert_eq!(code, 0);
    assert_eq!(text.matches("✅").count(), REQUIRED_PACKAGES.len() + 2);
}

#[test]
fn empty_environment_fails_every_package() {
    let (code, text) = run_with(Installed(&[]), Listing(""));
    assert_eq!(code, 1);
    assert_eq!(text.matches("is NOT installed").count(), REQUIRED_PACKAGES.len());
    assert!(text.contains("⚠️  Jupyter kernel 'movierec-kernel' is NOT found"));
}

#[test]
fn kernel_name_must_match_as_substring() {
    let (code, _) = run_with(Installed(EVERYTHING), Listing("movierec /k\npython3 /p"));
    assert_eq!(code, 1);
}
