//! Terminal UI writing to the process's stdout and stderr.

use console::Term;
use std::io::{self, Write};

use super::{should_use_colors, Theme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors based on the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }

    fn emit(term: &mut Term, line: &str) -> io::Result<()> {
        writeln!(term, "{}", line)?;
        term.flush()
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) -> io::Result<()> {
        Self::emit(&mut self.out, msg)
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        let line = self.theme.format_header(title);
        Self::emit(&mut self.out, &line)
    }

    fn hint(&mut self, msg: &str) -> io::Result<()> {
        let line = self.theme.format_hint(msg);
        Self::emit(&mut self.out, &line)
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        let line = self.theme.format_error(msg);
        Self::emit(&mut self.err, &line)
    }
}
