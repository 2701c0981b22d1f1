//! Status glyphs for report lines.

use super::theme::ReportTheme;

/// Outcome classes a report line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Check could not pass, but the cause is something the user can run a script for.
    Warning,
}

impl StatusKind {
    /// Emoji glyph for the status.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failed => "❌",
            Self::Warning => "⚠️",
        }
    }

    /// Text between glyph and message. Warnings take two spaces.
    fn gap(self) -> &'static str {
        match self {
            Self::Warning => "  ",
            Self::Success | Self::Failed => " ",
        }
    }

    /// Format a status line: glyph + message, styled with the theme.
    pub fn format(self, theme: &ReportTheme, msg: &str) -> String {
        let line = format!("{}{}{}", self.icon(), self.gap(), msg);
        let style = match self {
            Self::Success => &theme.success,
            Self::Failed => &theme.error,
            Self::Warning => &theme.warning,
        };
        style.apply_to(line).to_string()
    }
}

impl From<bool> for StatusKind {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }
}
