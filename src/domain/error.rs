//! Domain error types.

/// Top-level error type for fetchctl.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("`{tool}` not found on PATH (install it with: {hint})")]
    ToolNotFound { tool: String, hint: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("expiration helper {program} failed: {reason}")]
    Helper { program: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&LauncherError> for std::process::ExitCode {
    fn from(err: &LauncherError) -> Self {
        let code: u8 = match err {
            LauncherError::ToolNotFound { .. }
            | LauncherError::Spawn { .. }
            | LauncherError::Helper { .. }
            | LauncherError::Io(_) => 1,
            LauncherError::ConfigParse { .. } | LauncherError::ConfigInvalid { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
