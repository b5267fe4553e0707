//! `netwatch setup` command implementation.

use crate::error::Result;
use crate::probe::Verbosity;
use crate::python::VenvManager;
use std::path::PathBuf;

/// Arguments for the setup command.
pub struct SetupArgs {
    /// Workspace directory
    pub path: PathBuf,
    /// Venv directory (relative paths resolve against the workspace)
    pub venv: PathBuf,
    /// Requirements file to install after the upgrade step
    pub requirements: Option<PathBuf>,
    /// Path to the Python interpreter
    pub python: PathBuf,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the setup command.
pub fn execute(args: SetupArgs) -> Result<()> {
    let workspace = args.path.canonicalize().unwrap_or(args.path.clone());

    let venv_path = if args.venv.is_absolute() {
        args.venv.clone()
    } else {
        workspace.join(&args.venv)
    };

    println!("Setting up scripting environment...");
    println!();

    let manager = VenvManager::new(venv_path.clone(), args.python.clone(), args.verbosity);

    if manager.exists() {
        println!("Using existing venv at {}", venv_path.display());
    } else {
        println!("Creating venv at {}...", venv_path.display());
        manager.create()?;
    }

    println!("Upgrading pip...");
    manager.upgrade_pip()?;

    if let Some(ref requirements) = args.requirements {
        println!("Installing requirements from {}...", requirements.display());
        manager.install_requirements(requirements)?;
    }

    // Print summary
    println!();
    println!("Environment ready!");
    println!();
    println!("Base interpreter: {}", args.python.display());
    println!("Venv path:        {}", venv_path.display());
    println!("Venv python:      {}", manager.venv_python().display());

    println!();
    println!("Next steps:");
    #[cfg(windows)]
    println!("  {}\\Scripts\\activate     # Activate in your shell", args.venv.display());
    #[cfg(not(windows))]
    println!("  source {}/bin/activate   # Activate in your shell", args.venv.display());
    println!("  netwatch exec -- python  # Or run tools inside the venv directly");

    Ok(())
}
