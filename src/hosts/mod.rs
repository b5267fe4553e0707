//! Hosts file loading and expansion.
//!
//! A hosts file lists one target per line: a bare address or DNS name, a CIDR
//! block, or an inclusive address range, each with an optional friendly label
//! after a comma.

mod expand;
mod parser;

pub use expand::expand_spec;
pub use parser::{load_hosts, parse_line, HostEntry};
