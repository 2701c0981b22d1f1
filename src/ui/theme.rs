//! Visual theme and styling.

use console::Style;

/// Styles applied to report lines.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for failure lines (red bold).
    pub error: Style,
    /// Style for the title banner (bold).
    pub header: Style,
    /// Style for rules and section titles (dim).
    pub dim: Style,
    /// Style for commands inside guides (bold).
    pub command: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
            command: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick a theme for stdout given the `--no-color` flag.
    pub fn for_stdout(no_color: bool) -> Self {
        if should_use_colors(no_color) {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color: bool) -> bool {
    // https://no-color.org/
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = ReportTheme::plain();
        assert_eq!(theme.success.apply_to("ok").to_string(), "ok");
        assert_eq!(theme.error.apply_to("bad").to_string(), "bad");
        assert_eq!(theme.header.apply_to("title").to_string(), "title");
    }

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!should_use_colors(true));
    }
}
