//! Python virtual environment activation.
//!
//! Sourcing `bin/activate` only changes the environment of the shell that
//! sources it, so activation here is the same set of changes applied to the
//! child process instead.

use crate::domain::command::EnvOverride;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    pub root: PathBuf,
}

/// Result of activating a virtual environment against a search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub path: OsString,
    pub overrides: Vec<EnvOverride>,
}

impl VirtualEnv {
    /// A virtual environment rooted at `root`, if its activation script exists.
    pub fn detect(root: &Path) -> Option<Self> {
        root.join("bin")
            .join("activate")
            .is_file()
            .then(|| Self {
                root: root.to_path_buf(),
            })
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Search path with `bin/` in front, plus the child environment changes.
    ///
    /// Re-activating is a no-op on the path: `bin/` is not added twice.
    pub fn activation(&self, current_path: Option<&OsStr>) -> Activation {
        let bin = self.bin_dir();
        let mut dirs: Vec<PathBuf> = current_path
            .map(|p| std::env::split_paths(p).collect())
            .unwrap_or_default();
        if dirs.first() != Some(&bin) {
            dirs.retain(|d| d != &bin);
            dirs.insert(0, bin);
        }
        // join_paths fails only on entries containing the separator, which
        // split_paths never yields.
        let path = std::env::join_paths(&dirs).unwrap_or_else(|_| {
            current_path.map(OsStr::to_os_string).unwrap_or_default()
        });

        let overrides = vec![
            EnvOverride::Set(VIRTUAL_ENV_VAR.to_string(), self.root.clone().into_os_string()),
            EnvOverride::Set("PATH".to_string(), path.clone()),
            EnvOverride::Remove("PYTHONHOME".to_string()),
        ];
        Activation { path, overrides }
    }
}
