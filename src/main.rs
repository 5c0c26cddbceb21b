//! verify-dist CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verify_dist::cli::{BuildCommand, Cli, Command};
use verify_dist::ui::{TerminalUI, UserInterface};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the banners and the generator's
/// own output. `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verify_dist=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Exit code for a failed run. Codes that do not fit a byte (or would
/// truncate to 0) collapse to 1 so a failure never reads as success.
fn failure_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(byte) if byte != 0 => ExitCode::from(byte),
        _ => ExitCode::FAILURE,
    }
}

/// Run the build from the current working directory.
fn run(ui: &mut TerminalUI) -> verify_dist::Result<()> {
    let project_root =
        std::env::current_dir().context("cannot determine working directory")?;
    BuildCommand::new(&project_root).execute(ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("verify-dist starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    match run(&mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.already_reported() {
                ui.error(&e.to_string()).ok();
            }
            failure_code(e.exit_code())
        }
    }
}
