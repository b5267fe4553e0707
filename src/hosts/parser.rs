//! Hosts file parsing.

use crate::error::{NetwatchError, Result};
use crate::hosts::expand_spec;
use std::collections::HashSet;
use std::path::Path;

/// One monitored target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Address or DNS name handed to the prober.
    pub address: String,
    /// Friendly label from the hosts file; empty when none was given.
    pub label: String,
}

/// Parse a single hosts-file line into a spec and an optional label.
///
/// Returns `None` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    match line.split_once(',') {
        Some((spec, label)) => Some((spec.trim().to_string(), label.trim().to_string())),
        None => Some((line.to_string(), String::new())),
    }
}

/// Load and expand a hosts file.
///
/// A label on an expanding line (CIDR or range) applies to every address the
/// line produces. Invalid specs are reported on stderr and skipped; duplicate
/// addresses keep their first occurrence.
pub fn load_hosts(path: &Path) -> Result<Vec<HostEntry>> {
    if !path.exists() {
        return Err(NetwatchError::HostsFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for line in content.lines() {
        let Some((spec, label)) = parse_line(line) else {
            continue;
        };

        let addresses = match expand_spec(&spec) {
            Ok(addresses) => addresses,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        for address in addresses {
            if seen.insert(address.clone()) {
                entries.push(HostEntry {
                    address,
                    label: label.clone(),
                });
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_hosts(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts.txt");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_parse_line_plain() {
        assert_eq!(
            parse_line("192.168.1.1"),
            Some(("192.168.1.1".to_string(), String::new()))
        );
    }

    #[test]
    fn test_parse_line_with_label() {
        assert_eq!(
            parse_line("192.168.1.1, core router"),
            Some(("192.168.1.1".to_string(), "core router".to_string()))
        );
    }

    #[test]
    fn test_parse_line_blank_and_comment() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# edge site"), None);
    }

    #[test]
    fn test_load_simple_file() {
        let (_temp, path) = write_hosts("192.168.1.1, gateway\n8.8.8.8\n");
        let entries = load_hosts(&path).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address, "192.168.1.1");
        assert_eq!(entries[0].label, "gateway");
        assert_eq!(entries[1].address, "8.8.8.8");
        assert_eq!(entries[1].label, "");
    }

    #[test]
    fn test_load_expands_range_with_shared_label() {
        let (_temp, path) = write_hosts("10.0.0.1-10.0.0.3, rack1\n");
        let entries = load_hosts(&path).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.label == "rack1"));
        assert_eq!(entries[2].address, "10.0.0.3");
    }

    #[test]
    fn test_load_skips_comments_and_blanks() {
        let (_temp, path) = write_hosts("# lab hosts\n\n10.0.0.1\n\n# end\n");
        let entries = load_hosts(&path).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_load_skips_invalid_specs() {
        let (_temp, path) = write_hosts("10.0.0.0/33\n10.0.0.1\n");
        let entries = load_hosts(&path).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].address, "10.0.0.1");
    }

    #[test]
    fn test_load_deduplicates_first_wins() {
        let (_temp, path) = write_hosts("10.0.0.1, first\n10.0.0.1, second\n");
        let entries = load_hosts(&path).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "first");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_hosts(&temp.path().join("absent.txt"));
        assert!(matches!(result, Err(NetwatchError::HostsFileNotFound(_))));
    }

    #[test]
    fn test_load_preserves_file_order() {
        let (_temp, path) = write_hosts("8.8.8.8\n1.1.1.1\n10.0.0.1\n");
        let entries = load_hosts(&path).unwrap();
        let addresses: Vec<_> = entries.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, vec!["8.8.8.8", "1.1.1.1", "10.0.0.1"]);
    }
}
