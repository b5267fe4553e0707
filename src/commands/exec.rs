//! `netwatch exec` command implementation.

use crate::error::{NetwatchError, Result};
use crate::probe::Verbosity;
use crate::python::VenvManager;
use std::path::PathBuf;
use std::process::Command;

/// Arguments for the exec command.
pub struct ExecArgs {
    /// Workspace directory
    pub path: PathBuf,
    /// Venv directory (relative paths resolve against the workspace)
    pub venv: PathBuf,
    /// Command and arguments to run inside the venv
    pub command: Vec<String>,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the exec command.
///
/// The child runs with the venv activated and netwatch exits with the
/// child's own status code.
pub fn execute(args: ExecArgs) -> Result<()> {
    let workspace = args.path.canonicalize().unwrap_or(args.path.clone());

    let venv_path = if args.venv.is_absolute() {
        args.venv.clone()
    } else {
        workspace.join(&args.venv)
    };

    // The interpreter path is irrelevant here; only activation is needed
    let manager = VenvManager::new(venv_path.clone(), PathBuf::new(), args.verbosity);
    if !manager.exists() {
        return Err(NetwatchError::VenvNotFound(venv_path));
    }

    let (program, program_args) = args
        .command
        .split_first()
        .ok_or_else(|| NetwatchError::ConfigError("No command given to exec".into()))?;

    // Prefer the venv's own executables over the ambient PATH
    let candidate = manager.scripts_dir().join(program);
    let resolved = if candidate.exists() {
        candidate
    } else {
        PathBuf::from(program)
    };

    if args.verbosity >= 1 {
        eprintln!(
            "[netwatch] Executing: {} {}",
            resolved.display(),
            program_args.join(" ")
        );
    }

    let mut cmd = Command::new(&resolved);
    cmd.args(program_args);
    for (key, value) in manager.activation_env() {
        cmd.env(key, value);
    }

    let status = cmd.status().map_err(|e| {
        NetwatchError::CommandFailed(format!("{}: {}", resolved.display(), e))
    })?;

    std::process::exit(status.code().unwrap_or(1));
}
