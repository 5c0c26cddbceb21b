//! Error types for verify-dist operations.
//!
//! This module defines [`VerifyError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A generator that runs and exits non-zero is not reported with a message
//!   of our own; only its exit code is propagated
//! - A generator that cannot be started is reported the way a POSIX shell
//!   reports it (`<program>: <reason>`), with the shell's exit codes
//! - A failed write to stdout aborts the run like a failing `echo` under
//!   `set -e` (`VerifyError::Io`, exit code 1)
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors,
//!   such as an unusable working directory

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code a shell uses when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code a shell uses when a command is found but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Core error type for verify-dist operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The generator ran and exited non-zero.
    #[error("Command failed with exit code {code}: {command}")]
    GeneratorFailed { command: String, code: i32 },

    /// The generator could not be started at all.
    #[error("{}: {}", .program.display(), describe_spawn_error(.source))]
    GeneratorUnavailable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VerifyError {
    /// Process exit code the binary should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::GeneratorFailed { code, .. } => *code,
            Self::GeneratorUnavailable { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                _ => EXIT_NOT_EXECUTABLE,
            },
            Self::Io(_) | Self::Other(_) => 1,
        }
    }

    /// Whether the user has already seen the cause of this error.
    ///
    /// A generator that exited non-zero printed its own diagnostics, so
    /// nothing should be added on top of them.
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::GeneratorFailed { .. })
    }
}

fn describe_spawn_error(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "not found".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => err.to_string(),
    }
}

/// Result type alias for verify-dist operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
