//! `netwatch hosts` command implementation.

use crate::error::Result;
use crate::hosts;
use std::path::PathBuf;

/// Arguments for the hosts command.
pub struct HostsArgs {
    /// Hosts file to parse
    pub hosts_file: PathBuf,
}

/// Execute the hosts command: parse, expand, and list the hosts file.
pub fn execute(args: HostsArgs) -> Result<()> {
    let entries = hosts::load_hosts(&args.hosts_file)?;

    println!("Hosts from {}:", args.hosts_file.display());
    println!();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            println!("  {:>4}  {}", idx + 1, entry.address);
        } else {
            println!("  {:>4}  {}  ({})", idx + 1, entry.address, entry.label);
        }
    }

    println!();
    println!("{} host(s) after expansion", entries.len());

    Ok(())
}
