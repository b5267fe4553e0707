//! Host spec expansion (CIDR blocks and address ranges).

use crate::error::{NetwatchError, Result};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Expand a single host spec into concrete addresses.
///
/// `A.B.C.D/NN` expands to the usable hosts of the block (network and
/// broadcast excluded for prefixes shorter than /31, host bits masked off).
/// `A.B.C.D-E.F.G.H` expands to the inclusive range. Anything else passes
/// through unchanged as a single host.
pub fn expand_spec(spec: &str) -> Result<Vec<String>> {
    let spec = spec.trim();

    if spec.contains('/') {
        return expand_cidr(spec);
    }

    if let Some((start, end)) = spec.split_once('-') {
        let start = start.trim();
        let end = end.trim();

        match (start.parse::<Ipv4Addr>(), end.parse::<Ipv4Addr>()) {
            (Ok(s), Ok(e)) => return expand_range(spec, s, e),
            _ => {
                // Dashes are legal in DNS names; only reject specs that were
                // clearly meant as numeric ranges.
                if looks_numeric(start) && looks_numeric(end) {
                    return Err(NetwatchError::InvalidHost(format!(
                        "invalid address range: {}",
                        spec
                    )));
                }
            }
        }
    }

    Ok(vec![spec.to_string()])
}

fn expand_cidr(spec: &str) -> Result<Vec<String>> {
    let net: Ipv4Net = spec
        .parse()
        .map_err(|_| NetwatchError::InvalidHost(format!("invalid CIDR block: {}", spec)))?;

    Ok(net.hosts().map(|ip| ip.to_string()).collect())
}

fn expand_range(spec: &str, start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<String>> {
    if start > end {
        return Err(NetwatchError::InvalidHost(format!(
            "range start exceeds end: {}",
            spec
        )));
    }

    let start = u32::from(start);
    let end = u32::from(end);

    Ok((start..=end)
        .map(|ip| Ipv4Addr::from(ip).to_string())
        .collect())
}

/// True when the string contains only digits and dots (a would-be address).
fn looks_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.')
}
