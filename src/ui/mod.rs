//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use verify_dist::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.header("Generating").unwrap();
//! ui.hint("git push").unwrap();
//! assert_eq!(ui.stdout_lines(), ["Generating", "git push"]);
//! ```

use std::io;

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests. Every call writes exactly one
/// line; implementations must flush before returning so wrapper output stays
/// ordered relative to child process output. A failed write is returned to
/// the caller, which aborts the run.
pub trait UserInterface {
    /// Display a plain message on stdout.
    fn message(&mut self, msg: &str) -> io::Result<()>;

    /// Display a header/banner line on stdout.
    fn header(&mut self, title: &str) -> io::Result<()>;

    /// Display an advisory line (e.g. a suggested command) on stdout.
    fn hint(&mut self, msg: &str) -> io::Result<()>;

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str) -> io::Result<()>;
}
