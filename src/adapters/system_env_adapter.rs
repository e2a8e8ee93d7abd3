//! [`EnvPort`] backed by the real process environment.

use crate::ports::env_port::EnvPort;
use std::ffi::OsString;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvAdapter;

impl EnvPort for SystemEnvAdapter {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn path(&self) -> Option<OsString> {
        std::env::var_os("PATH")
    }
}
