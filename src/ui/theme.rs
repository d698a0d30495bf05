//! Visual theme and styling.

use console::Style;

use super::HEADER_WIDTH;

/// envcheck's visual theme.
#[derive(Debug, Clone)]
pub struct EnvcheckTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for failure and error lines (red bold).
    pub error: Style,
    /// Style for dim/secondary text such as captured stderr.
    pub dim: Style,
    /// Style for section titles (magenta bold).
    pub header: Style,
    /// Style for the `=` rules around headers (dim).
    pub border: Style,
    /// Style for follow-up hints (magenta dim).
    pub hint: Style,
}

impl Default for EnvcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success line (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning line (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a failure line (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }

    /// Format a section header framed by `=` rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(HEADER_WIDTH);
        format!(
            "{}\n{}\n{}",
            self.border.apply_to(&rule),
            self.header.apply_to(title),
            self.border.apply_to(&rule)
        )
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
