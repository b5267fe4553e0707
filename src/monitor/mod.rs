//! Probe scheduling and shared monitoring state.
//!
//! One worker thread per host loops probe, record, sleep until its stop flag
//! is raised. The dashboard reads ordered snapshots of the registry; the
//! hosts file can be re-synced while workers are running.

pub mod dashboard;

use crate::hosts::HostEntry;
use crate::probe::{resolve_hostname, HostStats, Pinger, Trend};
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// How often sleeping workers re-check their stop flag.
const STOP_POLL: Duration = Duration::from_millis(200);

/// One monitored host shared between its worker and the dashboard.
pub struct HostSlot {
    address: String,
    stop: AtomicBool,
    state: Mutex<SlotState>,
}

struct SlotState {
    label: String,
    resolved: String,
    stats: HostStats,
}

/// A point-in-time copy of one host's row, detached from the registry lock.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    pub address: String,
    pub label: String,
    pub resolved: String,
    pub last_latency: Option<f64>,
    pub avg_latency: f64,
    pub jitter: f64,
    pub success_rate: f64,
    pub trend: Trend,
    pub sample_count: u64,
    pub last_update: DateTime<Local>,
}

/// Shared monitor over an ordered host registry.
pub struct Monitor {
    slots: Mutex<Vec<Arc<HostSlot>>>,
    pinger: Arc<Pinger>,
    interval: Duration,
    history_size: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Monitor {
    /// Build a monitor over the given hosts. Workers start on [`start`].
    ///
    /// [`start`]: Monitor::start
    pub fn new(
        entries: Vec<HostEntry>,
        pinger: Pinger,
        interval: Duration,
        history_size: usize,
    ) -> Self {
        let slots = entries
            .into_iter()
            .map(|entry| Arc::new(Self::new_slot(entry, history_size)))
            .collect();

        Self {
            slots: Mutex::new(slots),
            pinger: Arc::new(pinger),
            interval,
            history_size,
        }
    }

    fn new_slot(entry: HostEntry, history_size: usize) -> HostSlot {
        HostSlot {
            state: Mutex::new(SlotState {
                label: entry.label,
                resolved: entry.address.clone(),
                stats: HostStats::new(history_size),
            }),
            address: entry.address,
            stop: AtomicBool::new(false),
        }
    }

    /// Number of hosts currently in the registry.
    pub fn host_count(&self) -> usize {
        lock(&self.slots).len()
    }

    /// Spawn one probe worker per registered host.
    pub fn start(&self) {
        for slot in lock(&self.slots).iter() {
            spawn_worker(Arc::clone(slot), Arc::clone(&self.pinger), self.interval);
        }
    }

    /// Signal every worker to stop after its current probe.
    pub fn stop(&self) {
        for slot in lock(&self.slots).iter() {
            slot.stop.store(true, Ordering::Relaxed);
        }
    }

    /// Copy the registry into ordered display rows.
    pub fn snapshot(&self) -> Vec<HostSnapshot> {
        lock(&self.slots)
            .iter()
            .map(|slot| {
                let state = lock(&slot.state);
                HostSnapshot {
                    address: slot.address.clone(),
                    label: state.label.clone(),
                    resolved: state.resolved.clone(),
                    last_latency: state.stats.last_latency,
                    avg_latency: state.stats.avg_latency,
                    jitter: state.stats.jitter,
                    success_rate: state.stats.success_rate,
                    trend: state.stats.trend,
                    sample_count: state.stats.sample_count,
                    last_update: state.stats.last_update,
                }
            })
            .collect()
    }

    /// Re-sync the registry against a freshly parsed hosts file.
    ///
    /// Hosts already present keep their worker and history (labels are
    /// refreshed), new hosts get a worker immediately, and workers of removed
    /// hosts are stopped. Registry order follows the new file order.
    pub fn sync_hosts(&self, entries: Vec<HostEntry>) {
        let mut slots = lock(&self.slots);

        let mut existing: HashMap<String, Arc<HostSlot>> = slots
            .drain(..)
            .map(|slot| (slot.address.clone(), slot))
            .collect();

        for entry in entries {
            if let Some(slot) = existing.remove(&entry.address) {
                lock(&slot.state).label = entry.label;
                slots.push(slot);
            } else {
                let slot = Arc::new(Self::new_slot(entry, self.history_size));
                spawn_worker(Arc::clone(&slot), Arc::clone(&self.pinger), self.interval);
                slots.push(slot);
            }
        }

        // Whatever was not reused is gone from the file
        for slot in existing.into_values() {
            slot.stop.store(true, Ordering::Relaxed);
        }
    }
}

fn spawn_worker(slot: Arc<HostSlot>, pinger: Arc<Pinger>, interval: Duration) {
    thread::spawn(move || {
        let resolved = resolve_hostname(&slot.address);
        lock(&slot.state).resolved = resolved;

        while !slot.stop.load(Ordering::Relaxed) {
            let latency = pinger.probe(&slot.address);
            lock(&slot.state).stats.record(latency);

            // Sleep in short steps so a stopped worker exits promptly
            let mut remaining = interval;
            while !slot.stop.load(Ordering::Relaxed) && remaining > Duration::ZERO {
                let step = remaining.min(STOP_POLL);
                thread::sleep(step);
                remaining = remaining.saturating_sub(step);
            }
        }
    });
}
