//! verify-dist - CI wrapper around the verification site generator.
//!
//! Runs `generate_verifications.py --out ./dist --clean --cache-meta` once,
//! surrounded by fixed status banners. A failing generator stops the run and
//! its exit code becomes ours; the publish hints are only printed on success.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the build command
//! - [`config`] - The hardcoded generator invocation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External program execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use verify_dist::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(
//!     config.command_line(),
//!     "generate_verifications.py --out ./dist --clean --cache-meta"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
