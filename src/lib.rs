//! movierec-validate - Environment readiness check for the movie
//! recommendation notebook.
//!
//! Probes the project's Python interpreter for the packages the notebook
//! imports, looks for the `movierec-kernel` Jupyter kernel, and prints a
//! report with next steps or remediation.
//!
//! # Modules
//!
//! - [`checks`] - Package and kernel probes, plus the fixed checklist
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Resolved runtime settings
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Bounded-time external command execution
//! - [`ui`] - Status glyphs, theme and report layout
//! - [`validator`] - The readiness run
//!
//! # Example
//!
//! ```no_run
//! use movierec_validate::config::ValidatorConfig;
//! use movierec_validate::ui::ReportTheme;
//! use movierec_validate::validator::Validator;
//!
//! let config = ValidatorConfig::default();
//! let mut validator = Validator::from_config(&config, std::io::stdout(), ReportTheme::plain());
//! let outcome = validator.run().unwrap();
//! std::process::exit(i32::from(outcome.exit_code()));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod validator;

pub use error::{Result, ValidateError};
pub use validator::{Outcome, Validator};
