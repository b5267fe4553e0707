//! Error types for netwatch.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for netwatch operations.
pub type Result<T> = std::result::Result<T, NetwatchError>;

/// Errors that can occur during netwatch operations.
#[derive(Error, Debug)]
pub enum NetwatchError {
    #[error("Python interpreter not found. Install Python 3 or specify path with --python")]
    PythonNotFound,

    #[error("ping executable not found on PATH")]
    PingNotFound,

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Hosts file not found: {0}")]
    HostsFileNotFound(PathBuf),

    #[error("No hosts to monitor (hosts file is empty)")]
    NoHosts,

    #[error("{0} of {1} hosts unavailable")]
    HostsUnavailable(usize, usize),

    #[error("Venv not found: {0}. Run 'netwatch setup' first")]
    VenvNotFound(PathBuf),

    #[error("Directory already exists: {0}")]
    DirectoryExists(PathBuf),

    #[error("Invalid host spec: {0}")]
    InvalidHost(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),
}
