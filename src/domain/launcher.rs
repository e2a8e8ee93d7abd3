//! End-to-end launch: locate the tool, activate the virtualenv, resolve the
//! plan, echo the command line and run it.

use crate::domain::command::LaunchCommand;
use crate::domain::error::LauncherError;
use crate::domain::launch::{build_command, resolve_plan};
use crate::domain::settings::LauncherSettings;
use crate::domain::tool_lookup::find_on_path;
use crate::domain::venv::VirtualEnv;
use crate::ports::env_port::EnvPort;
use crate::ports::process_port::ProcessPort;
use std::io::Write;

/// Resolve everything up to, but not including, execution.
///
/// Fails only when the tool cannot be found, even with the virtualenv
/// activated.
pub fn prepare(
    argument: Option<&str>,
    env: &dyn EnvPort,
    process: &dyn ProcessPort,
    settings: &LauncherSettings,
) -> Result<LaunchCommand, LauncherError> {
    let original_path = env.path();
    if find_on_path(&settings.tool, original_path.as_deref()).is_none() {
        log::info!(
            "{} not on PATH, trying virtualenv {}",
            settings.tool,
            settings.venv_dir.display()
        );
    }

    let activation = VirtualEnv::detect(&settings.venv_dir).map(|venv| {
        log::debug!("activating virtualenv {}", venv.root.display());
        venv.activation(original_path.as_deref())
    });
    let search_path = match &activation {
        Some(a) => Some(a.path.clone()),
        None => original_path,
    };

    let program = find_on_path(&settings.tool, search_path.as_deref()).ok_or_else(|| {
        LauncherError::ToolNotFound {
            tool: settings.tool.clone(),
            hint: settings.install_hint.clone(),
        }
    })?;
    log::debug!("using {}", program.display());

    let overrides = activation.map(|a| a.overrides).unwrap_or_default();
    let plan = resolve_plan(argument, env, process, settings, &overrides);
    Ok(build_command(&plan, &settings.tool, &program, overrides))
}

/// Prepare, echo the command line to `out`, run it and return its exit code.
pub fn launch(
    argument: Option<&str>,
    env: &dyn EnvPort,
    process: &dyn ProcessPort,
    settings: &LauncherSettings,
    out: &mut dyn Write,
) -> Result<i32, LauncherError> {
    let command = prepare(argument, env, process, settings)?;
    writeln!(out, "{command}")?;
    out.flush()?;
    let code = process.run(&command)?;
    if code != 0 {
        log::warn!("{} exited with status {code}", settings.tool);
    }
    Ok(code)
}
