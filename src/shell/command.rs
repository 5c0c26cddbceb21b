//! External program execution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Result, VerifyError};

/// Result of running an external program to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Signal that terminated the program, if any (unix only).
    pub signal: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            signal: None,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, signal: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            signal,
            duration,
            success: false,
        }
    }

    /// Build a result from the status a child process exited with.
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        if status.success() {
            Self::success(duration)
        } else {
            Self::failure(status.code(), exit_signal(&status), duration)
        }
    }

    /// Exit code a POSIX shell would report for this result.
    ///
    /// A program killed by signal N reports `128 + N`.
    pub fn propagated_code(&self) -> i32 {
        match (self.exit_code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => 128 + signal,
            (None, None) => 1,
        }
    }

    /// Turn a failed result into [`VerifyError::GeneratorFailed`].
    pub fn check(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(VerifyError::GeneratorFailed {
                command: command.to_string(),
                code: self.propagated_code(),
            })
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Something that can run a program to completion.
///
/// This trait allows faking process execution in tests.
pub trait Launcher {
    /// Run `program` with `args` in `cwd` and wait for it to exit.
    ///
    /// Returns an error only if the program could not be started. A program
    /// that starts and exits non-zero is reported through [`CommandResult`].
    fn launch(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<CommandResult>;
}

/// Launches real child processes.
///
/// The child is spawned directly (no intermediate shell) and inherits stdin,
/// stdout and stderr, so its output reaches the caller unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<CommandResult> {
        let start = Instant::now();

        let resolved = resolve_program(program, cwd);
        tracing::debug!(program = %resolved.display(), ?args, "spawning");

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| VerifyError::GeneratorUnavailable {
                program: program.to_path_buf(),
                source,
            })?;

        let result = CommandResult::from_status(status, start.elapsed());
        tracing::debug!(
            exit_code = ?result.exit_code,
            signal = ?result.signal,
            duration_ms = result.duration.as_millis() as u64,
            "program exited"
        );
        Ok(result)
    }
}

/// Resolve the program to spawn.
///
/// A bare name is looked up in `cwd` first, then on `PATH`. Anything with a
/// path separator is taken relative to `cwd`. If nothing matches, the
/// `cwd`-relative path is returned so spawning reports "not found".
pub fn resolve_program(program: &Path, cwd: &Path) -> PathBuf {
    let local = cwd.join(program);
    if program.components().count() > 1 || program.is_absolute() || local.is_file() {
        return local;
    }

    match which::which(program) {
        Ok(found) => found,
        Err(_) => local,
    }
}
