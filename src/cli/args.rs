//! CLI argument definitions.
//!
//! The wrapper takes no flags or arguments of its own. Parsing still goes
//! through clap so that `--help`, `--version` and usage errors behave like
//! any other command-line tool.

use clap::Parser;

/// Regenerate the verification site into ./dist.
///
/// Runs `generate_verifications.py --out ./dist --clean --cache-meta` in the
/// current directory and, if it succeeds, prints the git commands that
/// publish the result.
#[derive(Debug, Parser)]
#[command(name = "verify-dist")]
#[command(author, version, about)]
pub struct Cli {}
