//! Terminal output for readiness reports.

pub mod hints;
pub mod icons;
pub mod report;
pub mod theme;

pub use icons::StatusKind;
pub use report::Reporter;
pub use theme::{should_use_colors, ReportTheme};
