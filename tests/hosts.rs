//! Integration tests for the `netwatch hosts` command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command to run netwatch.
#[allow(deprecated)]
fn netwatch() -> Command {
    Command::cargo_bin("netwatch").unwrap()
}

#[test]
fn test_hosts_lists_entries_with_labels() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("hosts.txt"),
        "192.168.1.1, gateway\n8.8.8.8\n",
    )
    .unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "hosts.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("192.168.1.1"))
        .stdout(predicate::str::contains("(gateway)"))
        .stdout(predicate::str::contains("8.8.8.8"))
        .stdout(predicate::str::contains("2 host(s) after expansion"));
}

#[test]
fn test_hosts_expands_ranges() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hosts.txt"), "10.0.0.1-10.0.0.4, rack1\n").unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "hosts.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.1"))
        .stdout(predicate::str::contains("10.0.0.4"))
        .stdout(predicate::str::contains("4 host(s) after expansion"));
}

#[test]
fn test_hosts_expands_cidr_blocks() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hosts.txt"), "192.168.5.0/30\n").unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "hosts.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("192.168.5.1"))
        .stdout(predicate::str::contains("192.168.5.2"))
        .stdout(predicate::str::contains("2 host(s) after expansion"));
}

#[test]
fn test_hosts_warns_on_invalid_spec() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hosts.txt"), "10.0.0.0/33\n10.0.0.1\n").unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "hosts.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("1 host(s) after expansion"));
}

#[test]
fn test_hosts_skips_comments() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("hosts.txt"),
        "# lab switches\n10.0.0.1\n\n10.0.0.2\n",
    )
    .unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "hosts.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 host(s) after expansion"));
}

#[test]
fn test_hosts_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    netwatch()
        .current_dir(temp.path())
        .args(["hosts", "--hosts", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hosts file not found"));
}

#[test]
fn test_hosts_file_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("netwatch.toml"), "hosts_file = \"lab.txt\"\n").unwrap();
    fs::write(temp.path().join("lab.txt"), "10.0.0.1\n").unwrap();

    netwatch()
        .current_dir(temp.path())
        .arg("hosts")
        .assert()
        .success()
        .stdout(predicate::str::contains("lab.txt"))
        .stdout(predicate::str::contains("1 host(s) after expansion"));
}
