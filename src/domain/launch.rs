//! Launch plan resolution and command assembly.

use crate::domain::command::{EnvOverride, LaunchCommand};
use crate::domain::expiration::resolve_expiration;
use crate::domain::settings::LauncherSettings;
use crate::domain::tickers::{resolve_tickers, TickerSelection};
use crate::ports::env_port::EnvPort;
use crate::ports::process_port::ProcessPort;
use std::path::Path;

pub const DATASET_SOURCES_VAR: &str = "DATASET_SOURCES";
pub const BACKFILL_DATE_VAR: &str = "BACKFILL_DATE";
pub const FETCH_MODE_VAR: &str = "FETCH_MODE";

pub const FLAG_TICKER: &str = "-t";
pub const FLAG_TICKERS: &str = "-T";
pub const FLAG_FETCH_MODE: &str = "-g";
pub const FLAG_DATASET_SOURCES: &str = "-n";
pub const FLAG_EXP_DATE: &str = "-e";
pub const FLAG_CELERY: &str = "-Z";
pub const FLAG_BACKFILL: &str = "-F";

/// Every value the tool invocation depends on, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub tickers: TickerSelection,
    pub fetch_mode: String,
    pub dataset_sources: String,
    pub exp_date: Option<String>,
    pub backfill_date: Option<String>,
}

impl LaunchPlan {
    pub fn celery(&self) -> bool {
        self.tickers.celery
    }
}

pub fn resolve_plan(
    argument: Option<&str>,
    env: &dyn EnvPort,
    process: &dyn ProcessPort,
    settings: &LauncherSettings,
    overrides: &[EnvOverride],
) -> LaunchPlan {
    let tickers = resolve_tickers(argument, env, &settings.default_ticker);
    log::debug!("tickers {:?} from {:?}", tickers.tickers, tickers.source);

    let exp_date = resolve_expiration(env, &settings.expiration_helper, process, overrides);

    let dataset_sources = env
        .non_empty(DATASET_SOURCES_VAR)
        .unwrap_or_else(|| settings.dataset_sources.clone());
    let fetch_mode = env
        .non_empty(FETCH_MODE_VAR)
        .unwrap_or_else(|| settings.fetch_mode.clone());
    let backfill_date = env.non_empty(BACKFILL_DATE_VAR);
    if let Some(date) = &backfill_date {
        log::info!("backfilling from {date}");
    }

    LaunchPlan {
        tickers,
        fetch_mode,
        dataset_sources,
        exp_date,
        backfill_date,
    }
}

/// `<tool> (-t|-T) <tickers> -g <mode> -n <sources> [-e <date>] [-Z] [-F <date>]`
pub fn build_command(
    plan: &LaunchPlan,
    display_name: &str,
    program: &Path,
    overrides: Vec<EnvOverride>,
) -> LaunchCommand {
    let ticker_flag = if plan.tickers.count() > 1 {
        FLAG_TICKERS
    } else {
        FLAG_TICKER
    };

    let mut cmd = LaunchCommand::new(display_name, program)
        .flag_value(ticker_flag, plan.tickers.tickers.as_str())
        .flag_value(FLAG_FETCH_MODE, plan.fetch_mode.as_str())
        .flag_value(FLAG_DATASET_SOURCES, plan.dataset_sources.as_str());

    if let Some(date) = &plan.exp_date {
        cmd = cmd.flag_value(FLAG_EXP_DATE, date.as_str());
    }
    if plan.celery() {
        cmd = cmd.arg(FLAG_CELERY);
    }
    if let Some(date) = &plan.backfill_date {
        cmd = cmd.flag_value(FLAG_BACKFILL, date.as_str());
    }
    cmd.with_env(overrides)
}
