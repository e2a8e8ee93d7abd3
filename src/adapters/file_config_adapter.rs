//! INI file configuration adapter.

use crate::domain::error::LauncherError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::{Ini, IniDefault};
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    /// Whole-line `;`/`#` comments only; values are kept verbatim past those
    /// characters.
    fn parser() -> Ini {
        let mut defaults: IniDefault = Ini::new().defaults();
        defaults.enable_inline_comments = false;
        Ini::new_from_defaults(defaults)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LauncherError> {
        let path = path.as_ref();
        let mut config = Self::parser();
        config
            .load(path)
            .map_err(|reason| LauncherError::ConfigParse {
                file: path.display().to_string(),
                reason,
            })?;
        log::debug!("loaded config from {}", path.display());
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, LauncherError> {
        let mut config = Self::parser();
        config
            .read(content.to_string())
            .map_err(|reason| LauncherError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.config.get(section, key) {
            Some(v) => Self::parse_bool(&v).unwrap_or_else(|| {
                log::warn!("[{section}] {key} = {v:?} is not a boolean, using {default}");
                default
            }),
            None => default,
        }
    }
}
