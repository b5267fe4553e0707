//! `netwatch check` command implementation.

use crate::error::{NetwatchError, Result};
use crate::hosts::{self, HostEntry};
use crate::probe::{resolve_hostname, Pinger, Verbosity};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Output format for check results.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the check command.
pub struct CheckArgs {
    /// Hosts file to probe
    pub hosts_file: PathBuf,
    /// Per-probe timeout in seconds
    pub timeout_secs: u64,
    /// Output format
    pub format: OutputFormat,
    /// Exit nonzero when any host is unavailable
    pub strict: bool,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// One probed host in the report.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub host: String,
    pub label: String,
    pub hostname: String,
    pub latency_ms: Option<f64>,
    pub reachable: bool,
}

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let entries = hosts::load_hosts(&args.hosts_file)?;
    if entries.is_empty() {
        return Err(NetwatchError::NoHosts);
    }

    if args.format == OutputFormat::Text {
        println!(
            "Probing {} host(s) from {}...",
            entries.len(),
            args.hosts_file.display()
        );
        println!();
    }

    let pinger = Pinger::new(Duration::from_secs(args.timeout_secs), args.verbosity)?;
    let results = probe_all(&entries, &pinger);

    let unavailable = results.iter().filter(|r| !r.reachable).count();

    match args.format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results)?;
            println!("{}", json);
        }
    }

    if args.strict && unavailable > 0 {
        return Err(NetwatchError::HostsUnavailable(unavailable, results.len()));
    }

    Ok(())
}

/// Probe every host once, all in parallel, preserving input order.
fn probe_all(entries: &[HostEntry], pinger: &Pinger) -> Vec<CheckResult> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = entries
            .iter()
            .map(|entry| {
                scope.spawn(move || {
                    let latency = pinger.probe(&entry.address);
                    CheckResult {
                        host: entry.address.clone(),
                        label: entry.label.clone(),
                        hostname: resolve_hostname(&entry.address),
                        latency_ms: latency,
                        reachable: latency.is_some(),
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(_) => CheckResult {
                    host: String::new(),
                    label: String::new(),
                    hostname: String::new(),
                    latency_ms: None,
                    reachable: false,
                },
            })
            .collect()
    })
}

fn print_text(results: &[CheckResult]) {
    let host_width = column_width(results.iter().map(|r| r.host.len()), "HOST".len());
    let label_width = column_width(results.iter().map(|r| r.label.len()), "NAME".len());
    let hostname_width = column_width(results.iter().map(|r| r.hostname.len()), "HOSTNAME".len());

    println!(
        "{:<host_width$}  {:<label_width$}  {:<hostname_width$}  LATENCY",
        "HOST", "NAME", "HOSTNAME"
    );

    for result in results {
        let latency = match result.latency_ms {
            Some(ms) => format!("{:.2} ms", ms),
            None => "unavailable".to_string(),
        };
        println!(
            "{:<host_width$}  {:<label_width$}  {:<hostname_width$}  {}",
            result.host, result.label, result.hostname, latency
        );
    }

    let reachable = results.iter().filter(|r| r.reachable).count();
    println!();
    println!("{} of {} hosts reachable", reachable, results.len());
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.fold(header, usize::max)
}
