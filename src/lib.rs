//! Netwatch - host reachability monitor
//!
//! Probes a set of hosts with the system ping executable, keeps
//! sliding-window statistics per host, and renders them in a live terminal
//! table. Also provisions the workspace's Python scripting environment.

pub mod commands;
pub mod config;
pub mod error;
pub mod hosts;
pub mod monitor;
pub mod probe;
pub mod python;

pub use config::Config;
pub use error::{NetwatchError, Result};
