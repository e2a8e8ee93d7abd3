//! [`ProcessPort`] backed by `std::process::Command`.

use crate::domain::command::{EnvOverride, LaunchCommand};
use crate::domain::error::LauncherError;
use crate::ports::process_port::ProcessPort;
use std::process::{Command, ExitStatus, Stdio};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessAdapter;

impl SystemProcessAdapter {
    fn command(launch: &LaunchCommand) -> Command {
        let mut cmd = Command::new(&launch.program);
        cmd.args(&launch.args);
        for change in &launch.env {
            match change {
                EnvOverride::Set(key, value) => {
                    cmd.env(key, value);
                }
                EnvOverride::Remove(key) => {
                    cmd.env_remove(key);
                }
            }
        }
        cmd
    }

    fn spawn_error(launch: &LaunchCommand, source: std::io::Error) -> LauncherError {
        LauncherError::Spawn {
            program: launch.program.display().to_string(),
            source,
        }
    }
}

/// Child exit code; a child killed by signal `n` reports `128 + n` as a shell
/// would.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            log::warn!("child terminated by signal {signal}");
            return 128 + signal;
        }
    }
    log::warn!("child ended without an exit code ({status})");
    1
}

impl ProcessPort for SystemProcessAdapter {
    fn run(&self, launch: &LaunchCommand) -> Result<i32, LauncherError> {
        let status = Self::command(launch)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(launch, e))?;
        Ok(exit_code(status))
    }

    fn capture(&self, launch: &LaunchCommand) -> Result<String, LauncherError> {
        let output = Self::command(launch)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(launch, e))?;
        if !output.status.success() {
            return Err(LauncherError::Helper {
                program: launch.program.display().to_string(),
                reason: format!("exited with {}", output.status),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
