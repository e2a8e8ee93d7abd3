//! Installation-specific launcher settings (`[launcher]` section).

use crate::domain::error::LauncherError;
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

pub const SECTION: &str = "launcher";

pub const DEFAULT_TOOL: &str = "fetch";
pub const DEFAULT_VENV_DIR: &str = "/opt/venv";
pub const DEFAULT_EXPIRATION_HELPER: &str = "/opt/sa/tools/print-next-expiration-date.sh";
pub const DEFAULT_INSTALL_HINT: &str = "pip install stock-analysis-engine";
pub const DEFAULT_TICKER: &str = "SPY";
pub const DEFAULT_DATASET_SOURCES: &str = "initial";
pub const DEFAULT_FETCH_MODE: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub tool: String,
    pub venv_dir: PathBuf,
    pub expiration_helper: PathBuf,
    pub install_hint: String,
    pub default_ticker: String,
    pub dataset_sources: String,
    pub fetch_mode: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            venv_dir: PathBuf::from(DEFAULT_VENV_DIR),
            expiration_helper: PathBuf::from(DEFAULT_EXPIRATION_HELPER),
            install_hint: DEFAULT_INSTALL_HINT.to_string(),
            default_ticker: DEFAULT_TICKER.to_string(),
            dataset_sources: DEFAULT_DATASET_SOURCES.to_string(),
            fetch_mode: DEFAULT_FETCH_MODE.to_string(),
        }
    }
}

impl LauncherSettings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, LauncherError> {
        let settings = Self {
            tool: config.get_string_or(SECTION, "tool", DEFAULT_TOOL),
            venv_dir: config
                .get_string_or(SECTION, "venv_dir", DEFAULT_VENV_DIR)
                .into(),
            expiration_helper: config
                .get_string_or(SECTION, "expiration_helper", DEFAULT_EXPIRATION_HELPER)
                .into(),
            install_hint: config.get_string_or(SECTION, "install_hint", DEFAULT_INSTALL_HINT),
            default_ticker: config.get_string_or(SECTION, "default_ticker", DEFAULT_TICKER),
            dataset_sources: config.get_string_or(
                SECTION,
                "dataset_sources",
                DEFAULT_DATASET_SOURCES,
            ),
            fetch_mode: config.get_string_or(SECTION, "fetch_mode", DEFAULT_FETCH_MODE),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), LauncherError> {
        if self.default_ticker.contains(',') {
            return Err(LauncherError::ConfigInvalid {
                section: SECTION.to_string(),
                key: "default_ticker".to_string(),
                reason: "must be a single symbol".to_string(),
            });
        }
        if self.tool.chars().any(char::is_whitespace) {
            return Err(LauncherError::ConfigInvalid {
                section: SECTION.to_string(),
                key: "tool".to_string(),
                reason: "must be a command name or path without whitespace".to_string(),
            });
        }
        Ok(())
    }
}
