//! External process execution port trait.

use crate::domain::command::LaunchCommand;
use crate::domain::error::LauncherError;

pub trait ProcessPort {
    /// Run the command to completion with inherited stdio.
    ///
    /// Returns the child's exit code; a child terminated by a signal maps to 1.
    fn run(&self, command: &LaunchCommand) -> Result<i32, LauncherError>;

    /// Run the command and return its captured stdout.
    ///
    /// A nonzero exit is reported as [`LauncherError::Helper`].
    fn capture(&self, command: &LaunchCommand) -> Result<String, LauncherError>;
}
