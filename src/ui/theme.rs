//! Visual theme and styling.

use console::Style;

/// Styles applied to stdout lines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for banner lines (bold).
    pub header: Style,
    /// Style for advisory commands (dim).
    pub hint: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold().cyan(),
            hint: Style::new().dim(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    ///
    /// Plain output is byte-for-byte the unstyled text.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            hint: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Format an advisory line.
    pub fn format_hint(&self, msg: &str) -> String {
        self.hint.apply_to(msg).to_string()
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
