//! `netwatch run` command implementation.

use crate::error::{NetwatchError, Result};
use crate::hosts;
use crate::monitor::dashboard::{self, ReloadFeed, Thresholds};
use crate::monitor::Monitor;
use crate::probe::{Pinger, Verbosity};
use notify::{Config as NotifyConfig, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;

/// Arguments for the run command.
pub struct RunArgs {
    /// Hosts file to monitor
    pub hosts_file: PathBuf,
    /// Seconds between probes of the same host
    pub interval_secs: u64,
    /// Probes kept in the sliding stats window
    pub history_size: usize,
    /// Per-probe timeout in seconds
    pub timeout_secs: u64,
    /// Skip watching the hosts file for changes
    pub no_watch: bool,
    /// Coloring thresholds for the latency column
    pub thresholds: Thresholds,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the run command.
pub fn execute(args: RunArgs) -> Result<()> {
    let entries = hosts::load_hosts(&args.hosts_file)?;
    if entries.is_empty() {
        return Err(NetwatchError::NoHosts);
    }

    // The dashboard owns the terminal; probes run quiet regardless of -v
    let pinger = Pinger::new(Duration::from_secs(args.timeout_secs), 0)?;

    if args.verbosity >= 1 {
        eprintln!(
            "[netwatch] Monitoring {} host(s) from {}",
            entries.len(),
            args.hosts_file.display()
        );
    }

    let monitor = Monitor::new(
        entries,
        pinger,
        Duration::from_secs(args.interval_secs.max(1)),
        args.history_size,
    );
    monitor.start();

    // Keep the watcher alive for the whole dashboard session; dropping it
    // ends the event feed.
    let mut _watcher: Option<RecommendedWatcher> = None;
    let mut reload = None;

    if !args.no_watch {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(tx, NotifyConfig::default())?;

        match watcher.watch(&args.hosts_file, RecursiveMode::NonRecursive) {
            Ok(()) => {
                _watcher = Some(watcher);
                reload = Some(ReloadFeed {
                    events: rx,
                    hosts_file: &args.hosts_file,
                });
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to watch {}: {}",
                    args.hosts_file.display(),
                    e
                );
            }
        }
    }

    dashboard::run(&monitor, &args.thresholds, reload)
}
