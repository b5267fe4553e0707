//! Reverse DNS for the dashboard's hostname column.

use std::net::IpAddr;

/// Resolve an IP address back to a hostname, falling back to the input.
///
/// Non-address hosts (DNS names from the hosts file) pass through unchanged;
/// the lookup is only attempted for literal addresses.
pub fn resolve_hostname(host: &str) -> String {
    match host.parse::<IpAddr>() {
        Ok(ip) => dns_lookup::lookup_addr(&ip).unwrap_or_else(|_| host.to_string()),
        Err(_) => host.to_string(),
    }
}
