//! Process environment port trait.

use std::ffi::OsString;

pub trait EnvPort {
    /// Raw value of an environment variable, if set and valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// The current executable search path.
    fn path(&self) -> Option<OsString>;

    /// Trimmed value of `key`; empty or whitespace-only values count as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
