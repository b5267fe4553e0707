//! `netwatch clean` command implementation.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the clean command.
pub struct CleanArgs {
    /// Workspace directory
    pub path: PathBuf,
    /// Venv directory (relative paths resolve against the workspace)
    pub venv: PathBuf,
    /// Show what would be deleted without actually deleting
    pub dry_run: bool,
}

/// Execute the clean command.
pub fn execute(args: CleanArgs) -> Result<()> {
    let workspace = args.path.canonicalize().unwrap_or(args.path.clone());

    if args.dry_run {
        println!("Dry run: showing what would be deleted...");
    } else {
        println!("Cleaning provisioned artifacts...");
    }
    println!();

    let mut deleted_count = 0;

    let venv_path = if args.venv.is_absolute() {
        args.venv.clone()
    } else {
        workspace.join(&args.venv)
    };
    if venv_path.exists() {
        deleted_count += clean_path(&venv_path, args.dry_run)?;
    }

    // Script areas accumulate bytecode caches
    deleted_count += clean_pycache(&workspace, args.dry_run)?;

    println!();
    if deleted_count == 0 {
        println!("Nothing to clean.");
    } else if args.dry_run {
        println!(
            "Would delete {} item(s). Run without --dry-run to actually delete.",
            deleted_count
        );
    } else {
        println!("Cleaned {} item(s).", deleted_count);
    }

    Ok(())
}

/// Clean a single path (file or directory).
fn clean_path(path: &Path, dry_run: bool) -> Result<usize> {
    if dry_run {
        println!("  Would delete: {}", path.display());
    } else {
        println!("  Deleting: {}", path.display());
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
    }
    Ok(1)
}

/// Recursively clean __pycache__ directories.
fn clean_pycache(dir: &Path, dry_run: bool) -> Result<usize> {
    let mut count = 0;

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();

            if path.is_dir() {
                let name = entry.file_name();
                if name == "__pycache__" {
                    count += clean_path(&path, dry_run)?;
                } else if name != ".venv" && name != ".git" {
                    count += clean_pycache(&path, dry_run)?;
                }
            }
        }
    }

    Ok(count)
}
