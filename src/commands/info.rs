//! `netwatch info` command implementation.

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::Result;
use crate::hosts;
use crate::probe::Verbosity;
use crate::python::{find_python, VenvManager};
use std::path::PathBuf;
use std::process::Command;

/// Arguments for the info command.
pub struct InfoArgs {
    /// Workspace directory
    pub path: PathBuf,
    /// Hosts file (already merged with config)
    pub hosts_file: PathBuf,
    /// Venv directory (already merged with config)
    pub venv: PathBuf,
    /// Explicit interpreter override, if any
    pub python: Option<PathBuf>,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the info command.
pub fn execute(args: InfoArgs) -> Result<()> {
    let workspace = args.path.canonicalize().unwrap_or(args.path.clone());

    println!("Workspace");
    println!("=========");
    println!();

    let config_path = workspace.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("Config:     {}", config_path.display());
    } else if Config::load(&workspace)?.is_some() {
        println!("Config:     (inherited from a parent directory)");
    } else {
        println!("Config:     (none)");
    }

    let hosts_path = if args.hosts_file.is_absolute() {
        args.hosts_file.clone()
    } else {
        workspace.join(&args.hosts_file)
    };

    match hosts::load_hosts(&hosts_path) {
        Ok(entries) => {
            println!(
                "Hosts:      {} ({} host(s) after expansion)",
                hosts_path.display(),
                entries.len()
            );
        }
        Err(_) => {
            println!("Hosts:      {} (not found)", hosts_path.display());
        }
    }

    let venv_path = if args.venv.is_absolute() {
        args.venv.clone()
    } else {
        workspace.join(&args.venv)
    };

    println!();
    println!("Scripting Environment");
    println!("---------------------");

    let manager = VenvManager::new(venv_path.clone(), PathBuf::new(), args.verbosity);
    if manager.exists() {
        println!("Venv:       {}", venv_path.display());
        let venv_python = manager.venv_python();
        match interpreter_version(&venv_python) {
            Some(version) => println!("Python:     {} ({})", venv_python.display(), version),
            None => println!("Python:     {} (unable to query)", venv_python.display()),
        }
    } else {
        println!("Venv:       (not provisioned; run 'netwatch setup')");
        match args.python.or_else(find_python) {
            Some(python) => match interpreter_version(&python) {
                Some(version) => {
                    println!("Python:     {} ({})", python.display(), version);
                }
                None => println!("Python:     {} (unable to query)", python.display()),
            },
            None => println!("Python:     (not found)"),
        }
    }

    Ok(())
}

/// Ask an interpreter for its version string.
fn interpreter_version(python: &PathBuf) -> Option<String> {
    let output = Command::new(python).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    // Older interpreters print the version on stderr
    let text = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
