//! External program execution.

pub mod command;

pub use command::{resolve_program, CommandResult, Launcher, ProcessLauncher};
