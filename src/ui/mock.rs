//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line in
//! the order it was written, for later assertion.

use std::io;

use super::UserInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Message,
    Header,
    Hint,
    Error,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<(LineKind, String)>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that would have gone to stdout, in order.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(kind, _)| *kind != LineKind::Error)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Captured error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.of_kind(LineKind::Error)
    }

    /// Captured headers.
    pub fn headers(&self) -> Vec<&str> {
        self.of_kind(LineKind::Header)
    }

    /// Captured hints.
    pub fn hints(&self) -> Vec<&str> {
        self.of_kind(LineKind::Hint)
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints().iter().any(|h| h.contains(msg))
    }

    fn of_kind(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    fn push(&mut self, kind: LineKind, line: &str) -> io::Result<()> {
        self.lines.push((kind, line.to_string()));
        Ok(())
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) -> io::Result<()> {
        self.push(LineKind::Message, msg)
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        self.push(LineKind::Header, title)
    }

    fn hint(&mut self, msg: &str) -> io::Result<()> {
        self.push(LineKind::Hint, msg)
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        self.push(LineKind::Error, msg)
    }
}
