//! Assembled external command lines.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Environment change applied to a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOverride {
    Set(String, OsString),
    Remove(String),
}

/// A fully resolved command: what to execute, with which arguments and
/// environment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Name shown when the command line is echoed.
    pub display_name: String,
    /// Resolved executable path.
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<EnvOverride>,
}

impl LaunchCommand {
    pub fn new(display_name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn flag_value(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    pub fn with_env(mut self, env: Vec<EnvOverride>) -> Self {
        self.env = env;
        self
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Value following `flag`, if the flag is present.
    pub fn flag_value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

/// Shell-quoted rendering, suitable for echoing.
impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.display_name))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_words_with_spaces() {
        let cmd = LaunchCommand::new("fetch", "/usr/bin/fetch")
            .flag_value("-T", "AAPL MSFT")
            .flag_value("-g", "all");
        assert_eq!(cmd.to_string(), "fetch -T 'AAPL MSFT' -g all");
    }

    #[test]
    fn display_escapes_single_quotes() {
        let cmd = LaunchCommand::new("fetch", "fetch").arg("it's");
        assert_eq!(cmd.to_string(), r"fetch 'it'\''s'");
    }

    #[test]
    fn display_quotes_empty_argument() {
        let cmd = LaunchCommand::new("fetch", "fetch").arg("");
        assert_eq!(cmd.to_string(), "fetch ''");
    }

    #[test]
    fn flag_value_of_returns_following_argument() {
        let cmd = LaunchCommand::new("fetch", "fetch")
            .flag_value("-n", "initial")
            .arg("-Z");
        assert_eq!(cmd.flag_value_of("-n"), Some("initial"));
        assert_eq!(cmd.flag_value_of("-Z"), None);
        assert_eq!(cmd.flag_value_of("-F"), None);
        assert!(cmd.has_flag("-Z"));
    }
}
