//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod build;

pub use build::BuildCommand;

use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Errors
    ///
    /// Any error ends the run; see [`VerifyError::exit_code`](crate::VerifyError::exit_code)
    /// for the exit code it maps to.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
