//! Visual theme and styling.

use console::Style;

/// Terminal styling for report output.
#[derive(Debug, Clone)]
pub struct AuditTheme {
    /// Style for issue lines (red bold).
    pub issue: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for informational lines (green).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headers (bold magenta).
    pub header: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for AuditTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            issue: Style::new().red().bold(),
            warning: Style::new().color256(208),
            info: Style::new().green(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            issue: Style::new(),
            warning: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Pick colored or plain based on the environment.
    pub fn auto() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a top-level header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a fatal error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.issue.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_without_panic() {
        let theme = AuditTheme::plain();
        assert!(theme.format_header("AUDIT").contains("AUDIT"));
    }

    #[test]
    fn error_line_includes_icon_and_message() {
        let theme = AuditTheme::plain();
        let msg = theme.format_error("Path '/x' does not exist");
        assert!(msg.contains("✗"));
        assert!(msg.contains("does not exist"));
    }
}
