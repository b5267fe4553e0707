//! System ping invocation.
//!
//! One probe is one invocation of the platform's `ping` executable with a
//! single echo request. The executable's contract (flags, output format) is
//! owned by the platform; this module only builds the invocation and parses
//! the round-trip time out of the output.

use crate::error::{NetwatchError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Verbosity levels for output.
/// - 0: quiet (errors only)
/// - 1: normal (-v, show commands)
/// - 2: verbose (-vv, show commands + output)
pub type Verbosity = u8;

/// Wrapper for invoking the system ping executable.
pub struct Pinger {
    executable: PathBuf,
    timeout: Duration,
    verbosity: Verbosity,
}

impl Pinger {
    /// Locate the system ping executable and build a prober around it.
    pub fn new(timeout: Duration, verbosity: Verbosity) -> Result<Self> {
        let executable = which::which("ping").map_err(|_| NetwatchError::PingNotFound)?;
        Ok(Self::with_executable(executable, timeout, verbosity))
    }

    /// Build a prober around an explicit ping executable.
    pub fn with_executable(executable: PathBuf, timeout: Duration, verbosity: Verbosity) -> Self {
        Self {
            executable,
            timeout,
            verbosity,
        }
    }

    /// Get the path to the ping executable.
    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Probe a single host once.
    ///
    /// Returns the round-trip latency in milliseconds, or `None` when the
    /// host did not answer (timeout, unreachable, resolution failure).
    pub fn probe(&self, host: &str) -> Option<f64> {
        let args = self.ping_args(host);

        if self.verbosity >= 1 {
            eprintln!("[netwatch] Executing: ping {}", args.join(" "));
        }

        let output = Command::new(&self.executable)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .ok()?;

        if self.verbosity >= 2 {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.is_empty() {
                eprintln!("[netwatch] stdout:\n{}", stdout);
            }
        }

        if !output.status.success() {
            return None;
        }

        parse_latency_ms(&String::from_utf8_lossy(&output.stdout))
    }

    /// Build the platform-specific argument list for one echo request.
    fn ping_args(&self, host: &str) -> Vec<String> {
        let timeout_secs = self.timeout.as_secs().max(1);

        #[cfg(target_os = "linux")]
        {
            vec![
                "-n".into(),
                "-c".into(),
                "1".into(),
                "-W".into(),
                timeout_secs.to_string(),
                host.to_string(),
            ]
        }

        #[cfg(target_os = "macos")]
        {
            vec![
                "-n".into(),
                "-c".into(),
                "1".into(),
                "-t".into(),
                timeout_secs.to_string(),
                host.to_string(),
            ]
        }

        #[cfg(target_os = "windows")]
        {
            vec![
                "-n".into(),
                "1".into(),
                "-w".into(),
                (timeout_secs * 1000).to_string(),
                host.to_string(),
            ]
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            vec!["-c".into(), "1".into(), host.to_string()]
        }
    }
}

/// Parse the round-trip time, in milliseconds, out of ping output.
pub fn parse_latency_ms(output: &str) -> Option<f64> {
    if let Some(idx) = output.find("time=") {
        let rest = &output[idx + "time=".len()..];
        let token: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        return token.parse().ok();
    }

    // Windows reports sub-millisecond replies as "time<1ms".
    if output.contains("time<1ms") {
        return Some(1.0);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linux_output() {
        let output = "64 bytes from 192.168.1.1: icmp_seq=1 ttl=64 time=0.482 ms";
        assert_eq!(parse_latency_ms(output), Some(0.482));
    }

    #[test]
    fn test_parse_macos_output() {
        let output = "64 bytes from 8.8.8.8: icmp_seq=0 ttl=117 time=12.339 ms";
        assert_eq!(parse_latency_ms(output), Some(12.339));
    }

    #[test]
    fn test_parse_windows_output() {
        let output = "Reply from 192.168.1.1: bytes=32 time=14ms TTL=64";
        assert_eq!(parse_latency_ms(output), Some(14.0));
    }

    #[test]
    fn test_parse_windows_sub_millisecond() {
        let output = "Reply from 192.168.1.1: bytes=32 time<1ms TTL=64";
        assert_eq!(parse_latency_ms(output), Some(1.0));
    }

    #[test]
    fn test_parse_no_reply() {
        assert_eq!(parse_latency_ms("Request timeout for icmp_seq 0"), None);
        assert_eq!(parse_latency_ms(""), None);
    }

    #[test]
    fn test_pinger_with_executable() {
        let pinger =
            Pinger::with_executable(PathBuf::from("/sbin/ping"), Duration::from_secs(2), 0);
        assert_eq!(pinger.executable(), &PathBuf::from("/sbin/ping"));
    }

    #[test]
    fn test_ping_args_single_request() {
        let pinger =
            Pinger::with_executable(PathBuf::from("/sbin/ping"), Duration::from_secs(2), 0);
        let args = pinger.ping_args("10.0.0.1");

        assert!(args.contains(&"1".to_string()));
        assert_eq!(args.last().unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_ping_args_timeout_floor() {
        // Sub-second timeouts are rounded up to the executable's 1s floor
        let pinger =
            Pinger::with_executable(PathBuf::from("/sbin/ping"), Duration::from_millis(100), 0);
        let args = pinger.ping_args("10.0.0.1");
        assert!(args.iter().any(|a| a == "1"));
    }
}
