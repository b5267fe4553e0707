//! `netwatch init` command implementation.

use crate::config::{CONFIG_FILE_NAME, DEFAULT_HOSTS_FILE};
use crate::error::{NetwatchError, Result};
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command.
pub struct InitArgs {
    /// Directory to create the workspace in
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
}

const HOSTS_TEMPLATE: &str = "\
# One target per line: an address or DNS name, with an optional label after
# a comma. CIDR blocks (10.0.0.0/24) and ranges (10.0.0.1-10.0.0.9) expand
# to every usable address.
192.168.1.1, gateway
8.8.8.8, public dns
";

const CONFIG_TEMPLATE: &str = "\
hosts_file = \"hosts.txt\"
interval_secs = 1
history_size = 10
timeout_secs = 2

# Dashboard coloring thresholds for average latency
low_latency_ms = 50.0
high_latency_ms = 150.0
";

/// Execute the init command.
pub fn execute(args: InitArgs) -> Result<()> {
    let target_dir = &args.path;

    // Check if target directory exists and has content
    if target_dir.exists() {
        let has_content = target_dir.read_dir()?.next().is_some();
        if has_content && !args.force {
            return Err(NetwatchError::DirectoryExists(target_dir.to_path_buf()));
        }
    } else {
        fs::create_dir_all(target_dir)?;
    }

    let hosts_path = target_dir.join(DEFAULT_HOSTS_FILE);
    let config_path = target_dir.join(CONFIG_FILE_NAME);

    fs::write(&hosts_path, HOSTS_TEMPLATE)?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    println!("Created netwatch workspace in {}", target_dir.display());
    println!();
    println!("Generated files:");
    println!("  {}", DEFAULT_HOSTS_FILE);
    println!("  {}", CONFIG_FILE_NAME);
    println!();
    println!("Next steps:");
    println!("  cd {}", target_dir.display());
    println!("  $EDITOR hosts.txt      # List the hosts to monitor");
    println!("  netwatch run           # Start the live dashboard");
    println!("  netwatch setup         # Provision the scripting venv");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_workspace_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("lab");

        execute(InitArgs {
            path: dir.clone(),
            force: false,
        })
        .unwrap();

        assert!(dir.join("hosts.txt").exists());
        assert!(dir.join("netwatch.toml").exists());
    }

    #[test]
    fn test_init_rejects_non_empty_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.txt"), "content").unwrap();

        let result = execute(InitArgs {
            path: temp.path().to_path_buf(),
            force: false,
        });

        assert!(matches!(result, Err(NetwatchError::DirectoryExists(_))));
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.txt"), "content").unwrap();

        execute(InitArgs {
            path: temp.path().to_path_buf(),
            force: true,
        })
        .unwrap();

        assert!(temp.path().join("existing.txt").exists());
        assert!(temp.path().join("hosts.txt").exists());
    }

    #[test]
    fn test_init_template_config_parses() {
        let config = crate::config::Config::from_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.hosts_file, Some(PathBuf::from("hosts.txt")));
        assert_eq!(config.interval_secs, Some(1));
        assert_eq!(config.low_latency_ms, Some(50.0));
    }

    #[test]
    fn test_init_template_hosts_parse() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts.txt");
        fs::write(&path, HOSTS_TEMPLATE).unwrap();

        let entries = crate::hosts::load_hosts(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "gateway");
    }
}
