//! Shared types for CLI command handlers.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::registry::Registry;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Exit codes for scriptable use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input failed validation
    ValidationError = 1,
    /// File or serialization problem
    IoError = 2,
}

/// Errors produced by CLI command handlers.
#[derive(Debug)]
pub enum CliError {
    /// File access or serialization failure
    Io(String),
    /// Invalid input
    Validation(String),
}

impl CliError {
    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::IoError,
            Self::Validation(_) => ExitCode::ValidationError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Resolve and load the registry for a headless command.
///
/// Resolution order: explicit `--registry` flag, then the path from the
/// user config, then the built-in catalog.
pub fn load_registry(path: Option<&Path>) -> CliResult<Registry> {
    if let Some(path) = path {
        return Registry::load(path)
            .map_err(|e| CliError::io(format!("Failed to load registry: {e:#}")));
    }

    let configured = Config::load().ok().and_then(|c| c.registry.path);
    if let Some(path) = configured {
        return Registry::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load configured registry: {e:#}")));
    }

    Registry::builtin().map_err(|e| CliError::io(format!("Failed to load built-in catalog: {e:#}")))
}
