//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::system_env_adapter::SystemEnvAdapter;
use crate::adapters::system_process_adapter::SystemProcessAdapter;
use crate::domain::error::LauncherError;
use crate::domain::launcher;
use crate::domain::secrets::render_secret_manifests;
use crate::domain::settings::LauncherSettings;

#[derive(Parser, Debug)]
#[command(
    name = "fetchctl",
    about = "Resolve dataset collection settings and run the fetch tool",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ticker list, overrides DEFAULT_TICKERS
    pub tickers: Option<String>,

    /// INI file with a [launcher] section
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the command line without running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render Kubernetes Secret manifests from provider settings
    Secrets {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Some(Command::Secrets { config, output }) => run_secrets(&config, output.as_ref()),
        None => run_launch(cli.tickers.as_deref(), cli.config.as_ref(), cli.dry_run),
    }
}

pub fn load_settings(config_path: Option<&PathBuf>) -> Result<LauncherSettings, LauncherError> {
    match config_path {
        Some(path) => {
            log::info!("loading launcher settings from {}", path.display());
            LauncherSettings::from_config(&FileConfigAdapter::from_file(path)?)
        }
        None => Ok(LauncherSettings::default()),
    }
}

/// Map a child exit status onto a process exit code.
pub fn exit_code_from_status(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn run_launch(tickers: Option<&str>, config_path: Option<&PathBuf>, dry_run: bool) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let env = SystemEnvAdapter;
    let process = SystemProcessAdapter;

    if dry_run {
        return match launcher::prepare(tickers, &env, &process, &settings) {
            Ok(command) => {
                println!("{command}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                (&e).into()
            }
        };
    }

    let stdout = io::stdout();
    match launcher::launch(tickers, &env, &process, &settings, &mut stdout.lock()) {
        Ok(code) => exit_code_from_status(code),
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_secrets(config_path: &PathBuf, output_path: Option<&PathBuf>) -> ExitCode {
    let result = FileConfigAdapter::from_file(config_path)
        .and_then(|adapter| render_secret_manifests(&adapter));
    let yaml = match result {
        Ok(y) => y,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match output_path {
        Some(path) => match fs::write(path, &yaml) {
            Ok(()) => {
                eprintln!("Manifests written to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to write manifests: {e}");
                ExitCode::from(1)
            }
        },
        None => {
            print!("{yaml}");
            ExitCode::SUCCESS
        }
    }
}
