//! Per-host probe statistics over a sliding window.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Direction of the average latency since the previous probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Arrow glyph for table display.
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "-",
        }
    }
}

/// Statistics for a single host, recomputed after every probe.
///
/// The window holds the last `capacity` probes; a failed probe is recorded as
/// `None` and counts against the success rate.
#[derive(Debug, Clone)]
pub struct HostStats {
    history: VecDeque<Option<f64>>,
    capacity: usize,
    /// Latency of the most recent probe, if it succeeded.
    pub last_latency: Option<f64>,
    /// Mean of the successful samples in the window, in ms.
    pub avg_latency: f64,
    /// Max minus min of the successful samples in the window, in ms.
    pub jitter: f64,
    /// Successful samples over total samples in the window, as a percentage.
    pub success_rate: f64,
    /// Whether the average rose, fell, or held at the last recomputation.
    pub trend: Trend,
    /// Total probes ever recorded for this host.
    pub sample_count: u64,
    /// Local wall-clock time of the most recent probe.
    pub last_update: DateTime<Local>,
}

impl HostStats {
    /// Create empty statistics with the given window size.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            last_latency: None,
            avg_latency: 0.0,
            jitter: 0.0,
            success_rate: 0.0,
            trend: Trend::Flat,
            sample_count: 0,
            last_update: Local::now(),
        }
    }

    /// Record one probe outcome and recompute the derived metrics.
    pub fn record(&mut self, latency_ms: Option<f64>) {
        self.sample_count += 1;
        self.last_update = Local::now();
        self.last_latency = latency_ms;

        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(latency_ms);

        self.recompute();
    }

    /// True when the window contains at least one sample.
    pub fn has_samples(&self) -> bool {
        !self.history.is_empty()
    }

    fn recompute(&mut self) {
        let ok: Vec<f64> = self.history.iter().flatten().copied().collect();

        if ok.is_empty() {
            self.avg_latency = 0.0;
            self.jitter = 0.0;
            self.success_rate = 0.0;
            self.trend = Trend::Flat;
            return;
        }

        let new_avg = ok.iter().sum::<f64>() / ok.len() as f64;

        // Compare against the previous average before replacing it; the very
        // first average has nothing to compare to and stays flat.
        if self.avg_latency > 0.0 {
            self.trend = if new_avg > self.avg_latency {
                Trend::Up
            } else if new_avg < self.avg_latency {
                Trend::Down
            } else {
                Trend::Flat
            };
        }

        self.avg_latency = new_avg;

        let max = ok.iter().cloned().fold(f64::MIN, f64::max);
        let min = ok.iter().cloned().fold(f64::MAX, f64::min);
        self.jitter = max - min;

        self.success_rate = (ok.len() as f64 / self.history.len() as f64) * 100.0;
    }
}
