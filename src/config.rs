//! Configuration file handling for netwatch.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The configuration file name.
pub const CONFIG_FILE_NAME: &str = "netwatch.toml";

/// Default hosts file name.
pub const DEFAULT_HOSTS_FILE: &str = "hosts.txt";

/// Default venv directory name.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Configuration from netwatch.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Hosts file to monitor (e.g., "hosts.txt")
    pub hosts_file: Option<PathBuf>,

    /// Seconds between probes of the same host
    pub interval_secs: Option<u64>,

    /// Number of probes kept in the sliding stats window
    pub history_size: Option<usize>,

    /// Per-probe timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Path to the Python interpreter used for `setup`
    pub python_path: Option<PathBuf>,

    /// Directory of the scripting venv
    pub venv_dir: Option<PathBuf>,

    /// Average latency at or below this is shown green
    pub low_latency_ms: Option<f64>,

    /// Average latency at or below this is shown yellow; above is red
    pub high_latency_ms: Option<f64>,
}

impl Config {
    /// Load configuration from netwatch.toml in the given directory or its parents.
    ///
    /// Returns `Ok(None)` if no configuration file is found.
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir
            .canonicalize()
            .unwrap_or_else(|_| start_dir.to_path_buf());

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                let config: Self = toml::from_str(&content)?;
                return Ok(Some(config));
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load configuration from the current directory.
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_complete_config() {
        let toml = r#"
hosts_file = "lab-hosts.txt"
interval_secs = 5
history_size = 30
timeout_secs = 1
python_path = "/usr/local/bin/python3"
venv_dir = ".venv"
low_latency_ms = 40.0
high_latency_ms = 120.0
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.hosts_file, Some(PathBuf::from("lab-hosts.txt")));
        assert_eq!(config.interval_secs, Some(5));
        assert_eq!(config.history_size, Some(30));
        assert_eq!(config.timeout_secs, Some(1));
        assert_eq!(
            config.python_path,
            Some(PathBuf::from("/usr/local/bin/python3"))
        );
        assert_eq!(config.venv_dir, Some(PathBuf::from(".venv")));
        assert_eq!(config.low_latency_ms, Some(40.0));
        assert_eq!(config.high_latency_ms, Some(120.0));
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.hosts_file, None);
        assert_eq!(config.interval_secs, None);
        assert_eq!(config.python_path, None);
        assert_eq!(config.venv_dir, None);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
hosts_file = "hosts.txt"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.hosts_file, Some(PathBuf::from("hosts.txt")));
        assert_eq!(config.interval_secs, None);
    }

    #[test]
    fn test_load_from_directory() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_path,
            r#"
hosts_file = "edge-routers.txt"
interval_secs = 2
"#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap().unwrap();
        assert_eq!(config.hosts_file, Some(PathBuf::from("edge-routers.txt")));
        assert_eq!(config.interval_secs, Some(2));
    }

    #[test]
    fn test_load_searches_parent_directories() {
        let temp = TempDir::new().unwrap();

        // Create config in root
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, r#"hosts_file = "parent-hosts.txt""#).unwrap();

        // Create a nested directory
        let nested = temp.path().join("site").join("rack1");
        fs::create_dir_all(&nested).unwrap();

        // Load from nested directory should find parent config
        let config = Config::load(&nested).unwrap().unwrap();
        assert_eq!(config.hosts_file, Some(PathBuf::from("parent-hosts.txt")));
    }

    #[test]
    fn test_load_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();

        // No config file created
        let result = Config::load(temp.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let toml = "this is not valid toml [[[";
        let result = Config::from_toml(toml);
        assert!(result.is_err());
    }
}
