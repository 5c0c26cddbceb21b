//! Hardcoded generator invocation.
//!
//! The wrapper has no configuration surface: no flags, no config file and no
//! environment lookups. The values below are the whole contract with the
//! external generator.

use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the external generator program.
pub const GENERATOR_PROGRAM: &str = "generate_verifications.py";

/// Directory the generator writes the site into.
pub const OUTPUT_DIR: &str = "./dist";

/// How the external generator is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Program to run, resolved against the working directory and `PATH`.
    pub program: PathBuf,

    /// Value passed to `--out`.
    pub out_dir: PathBuf,

    /// Pass `--clean` (wipe the output dir first).
    pub clean: bool,

    /// Pass `--cache-meta` (reuse previously rendered meta images).
    pub cache_meta: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(GENERATOR_PROGRAM),
            out_dir: PathBuf::from(OUTPUT_DIR),
            clean: true,
            cache_meta: true,
        }
    }
}

impl GeneratorConfig {
    /// Arguments handed to the generator, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from("--out"), self.out_dir.clone().into()];
        if self.clean {
            args.push("--clean".into());
        }
        if self.cache_meta {
            args.push("--cache-meta".into());
        }
        args
    }

    /// Human-readable form of the full command line, for logs and errors.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}
