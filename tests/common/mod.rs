#![allow(dead_code)]

use fetchctl::domain::command::LaunchCommand;
use fetchctl::domain::error::LauncherError;
use fetchctl::domain::settings::LauncherSettings;
use fetchctl::ports::env_port::EnvPort;
use fetchctl::ports::process_port::ProcessPort;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct MockEnv {
    pub vars: HashMap<String, String>,
    pub path: Option<OsString>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            path: None,
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_path(mut self, dirs: &[&Path]) -> Self {
        self.path = Some(std::env::join_paths(dirs).unwrap());
        self
    }
}

impl EnvPort for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn path(&self) -> Option<OsString> {
        self.path.clone()
    }
}

pub struct MockProcess {
    pub exit_code: i32,
    pub helper_output: Result<String, String>,
    pub runs: RefCell<Vec<LaunchCommand>>,
    pub captures: RefCell<Vec<LaunchCommand>>,
}

impl MockProcess {
    pub fn new() -> Self {
        Self {
            exit_code: 0,
            helper_output: Ok(String::new()),
            runs: RefCell::new(Vec::new()),
            captures: RefCell::new(Vec::new()),
        }
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn with_helper_output(mut self, output: &str) -> Self {
        self.helper_output = Ok(output.to_string());
        self
    }

    pub fn with_helper_failure(mut self, reason: &str) -> Self {
        self.helper_output = Err(reason.to_string());
        self
    }

    pub fn run_count(&self) -> usize {
        self.runs.borrow().len()
    }

    pub fn capture_count(&self) -> usize {
        self.captures.borrow().len()
    }
}

impl ProcessPort for MockProcess {
    fn run(&self, command: &LaunchCommand) -> Result<i32, LauncherError> {
        self.runs.borrow_mut().push(command.clone());
        Ok(self.exit_code)
    }

    fn capture(&self, command: &LaunchCommand) -> Result<String, LauncherError> {
        self.captures.borrow_mut().push(command.clone());
        self.helper_output
            .clone()
            .map_err(|reason| LauncherError::Helper {
                program: command.program.display().to_string(),
                reason,
            })
    }
}

/// Write an executable stub script at `dir/name`.
pub fn make_executable(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

/// A virtualenv layout with `bin/activate`, optionally holding the tool.
pub fn make_venv(with_tool: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::write(bin.join("activate"), "# activate\n").unwrap();
    if with_tool {
        make_executable(&bin, "fetch");
    }
    dir
}

/// Launch fixtures: a directory holding the tool, and settings pointing the
/// virtualenv and expiration helper at paths that do not exist.
pub struct Fixture {
    pub tool_dir: TempDir,
    pub scratch: TempDir,
    pub settings: LauncherSettings,
}

impl Fixture {
    pub fn new() -> Self {
        let tool_dir = tempfile::tempdir().unwrap();
        make_executable(tool_dir.path(), "fetch");
        let scratch = tempfile::tempdir().unwrap();
        let settings = LauncherSettings {
            venv_dir: scratch.path().join("no-venv"),
            expiration_helper: scratch.path().join("no-helper.sh"),
            ..LauncherSettings::default()
        };
        Self {
            tool_dir,
            scratch,
            settings,
        }
    }

    pub fn env(&self) -> MockEnv {
        MockEnv::new().with_path(&[self.tool_dir.path()])
    }

    /// Install an executable expiration helper and point the settings at it.
    pub fn with_helper(mut self) -> Self {
        let helper = make_executable(self.scratch.path(), "next-exp-date.sh");
        self.settings.expiration_helper = helper;
        self
    }
}
