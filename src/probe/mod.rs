//! Host probing: ping invocation, reverse DNS, and per-host statistics.

mod pinger;
mod resolver;
mod stats;

pub use pinger::{parse_latency_ms, Pinger, Verbosity};
pub use resolver::resolve_hostname;
pub use stats::{HostStats, Trend};
