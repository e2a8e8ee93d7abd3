//! Options expiration date resolution.

use crate::domain::command::{EnvOverride, LaunchCommand};
use crate::domain::tool_lookup::is_executable;
use crate::ports::env_port::EnvPort;
use crate::ports::process_port::ProcessPort;
use chrono::NaiveDate;
use std::path::Path;

pub const EXP_DATE_VAR: &str = "EXP_DATE";

/// `EXP_DATE` if set, else the helper script's output, else `None`.
///
/// Helper failures are logged and treated as "no date"; the tool then applies
/// its own default.
pub fn resolve_expiration(
    env: &dyn EnvPort,
    helper: &Path,
    process: &dyn ProcessPort,
    overrides: &[EnvOverride],
) -> Option<String> {
    if let Some(date) = env.non_empty(EXP_DATE_VAR) {
        log::debug!("expiration date from {EXP_DATE_VAR}: {date}");
        warn_if_not_date(&date);
        return Some(date);
    }

    if !is_executable(helper) {
        log::debug!("no expiration helper at {}", helper.display());
        return None;
    }

    let command = LaunchCommand::new(helper.display().to_string(), helper)
        .with_env(overrides.to_vec());
    match process.capture(&command) {
        Ok(stdout) => {
            let date = first_line(&stdout)?;
            log::info!("expiration date from {}: {date}", helper.display());
            warn_if_not_date(&date);
            Some(date)
        }
        Err(e) => {
            log::warn!("{e}; continuing without an expiration date");
            None
        }
    }
}

fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn warn_if_not_date(value: &str) {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        log::warn!("expiration date {value:?} is not YYYY-MM-DD, passing it through");
    }
}
