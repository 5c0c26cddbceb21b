//! The build command: run the generator, then print publish hints.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::shell::{Launcher, ProcessLauncher};
use crate::ui::UserInterface;

use super::Command;

/// Runs the external generator once and reports the outcome.
///
/// Output order is fixed: the leading banner, then whatever the generator
/// prints, then (only if it exited 0) the trailing banner. A failing
/// generator ends the run without another line being written.
pub struct BuildCommand<L = ProcessLauncher> {
    project_root: PathBuf,
    config: GeneratorConfig,
    launcher: L,
}

impl BuildCommand<ProcessLauncher> {
    /// Create a build command that spawns the real generator in `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self::with_launcher(project_root, GeneratorConfig::default(), ProcessLauncher)
    }
}

impl<L: Launcher> BuildCommand<L> {
    /// Create a build command with an explicit config and launcher.
    pub fn with_launcher(project_root: &Path, config: GeneratorConfig, launcher: L) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            launcher,
        }
    }

    /// The invocation this command runs.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn leading_banner(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.header(&format!(
            "==> Generating verification site into {}",
            self.config.out_dir.display()
        ))?;
        Ok(())
    }

    fn trailing_banner(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let out_dir = self.config.out_dir.display().to_string();
        let publish_path = out_dir.trim_start_matches("./");

        ui.header(&format!("==> Build complete: {} is ready", out_dir))?;
        ui.message("Next steps (not run automatically):")?;
        ui.hint(&format!("  git add {}", publish_path))?;
        ui.hint("  git commit -m \"Rebuild verification site\"")?;
        ui.hint("  git push")?;
        Ok(())
    }
}

impl<L: Launcher> Command for BuildCommand<L> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        self.leading_banner(ui)?;

        let command_line = self.config.command_line();
        tracing::debug!(command = %command_line, cwd = %self.project_root.display(), "running generator");

        let result = self
            .launcher
            .launch(&self.config.program, &self.config.args(), &self.project_root)?
            .check(&command_line)?;

        tracing::debug!(
            duration_ms = result.duration.as_millis() as u64,
            "generator finished"
        );

        self.trailing_banner(ui)
    }
}
