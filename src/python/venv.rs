//! Scripting venv management.
//!
//! The creation and upgrade steps are pass-throughs to the interpreter's own
//! tooling: `python -m venv` builds the environment, the venv's interpreter
//! runs `pip install --upgrade pip`. Failures propagate from those tools.

use crate::error::{NetwatchError, Result};
use crate::probe::Verbosity;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Manager for the workspace's Python virtual environment.
pub struct VenvManager {
    venv_dir: PathBuf,
    python: PathBuf,
    verbosity: Verbosity,
}

impl VenvManager {
    /// Create a manager for the given venv directory and base interpreter.
    pub fn new(venv_dir: PathBuf, python: PathBuf, verbosity: Verbosity) -> Self {
        Self {
            venv_dir,
            python,
            verbosity,
        }
    }

    /// Get the venv directory.
    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    /// Whether the venv directory already exists.
    pub fn exists(&self) -> bool {
        self.venv_dir.exists()
    }

    /// The venv's executables directory (`bin` on Unix, `Scripts` on Windows).
    pub fn scripts_dir(&self) -> PathBuf {
        #[cfg(windows)]
        {
            self.venv_dir.join("Scripts")
        }

        #[cfg(not(windows))]
        {
            self.venv_dir.join("bin")
        }
    }

    /// The venv's own interpreter.
    pub fn venv_python(&self) -> PathBuf {
        #[cfg(windows)]
        {
            self.scripts_dir().join("python.exe")
        }

        #[cfg(not(windows))]
        {
            self.scripts_dir().join("python")
        }
    }

    /// Environment variables that activate the venv for a child process:
    /// `VIRTUAL_ENV` plus the scripts directory prepended to `PATH`.
    pub fn activation_env(&self) -> Vec<(String, String)> {
        let mut vars = vec![(
            "VIRTUAL_ENV".to_string(),
            self.venv_dir.to_string_lossy().to_string(),
        )];

        let mut paths = vec![self.scripts_dir()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        if let Ok(joined) = std::env::join_paths(paths) {
            vars.push(("PATH".to_string(), joined.to_string_lossy().to_string()));
        }

        vars
    }

    /// Create the venv by invoking the external environment builder.
    pub fn create(&self) -> Result<()> {
        self.run(
            &self.python,
            &["-m", "venv", &self.venv_dir.to_string_lossy()],
            false,
        )?;
        Ok(())
    }

    /// Upgrade pip inside the venv.
    pub fn upgrade_pip(&self) -> Result<()> {
        self.run(
            &self.venv_python(),
            &["-m", "pip", "install", "--upgrade", "pip"],
            true,
        )?;
        Ok(())
    }

    /// Install a requirements file into the venv.
    pub fn install_requirements(&self, requirements: &Path) -> Result<()> {
        self.run(
            &self.venv_python(),
            &[
                "-m",
                "pip",
                "install",
                "-r",
                &requirements.to_string_lossy(),
            ],
            true,
        )?;
        Ok(())
    }

    /// Run an external command, activated inside the venv when asked.
    fn run(&self, program: &Path, args: &[&str], activate: bool) -> Result<Output> {
        if self.verbosity >= 1 {
            eprintln!(
                "[netwatch] Executing: {} {}",
                program.display(),
                args.join(" ")
            );
        }

        let mut cmd = Command::new(program);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        if activate {
            for (key, value) in self.activation_env() {
                cmd.env(key, value);
            }
        }

        let output = cmd.output()?;

        if self.verbosity >= 2 {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.is_empty() {
                eprintln!("[netwatch] stdout:\n{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("[netwatch] stderr:\n{}", stderr);
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(NetwatchError::CommandFailed(format!(
                "{} {}\nexit code: {:?}\nstdout: {}\nstderr: {}",
                program.display(),
                args.join(" "),
                output.status.code(),
                stdout,
                stderr
            )));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(temp: &TempDir) -> VenvManager {
        VenvManager::new(
            temp.path().join(".venv"),
            PathBuf::from("/usr/bin/python3"),
            0,
        )
    }

    #[test]
    fn test_exists_reflects_directory() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp);
        assert!(!mgr.exists());

        std::fs::create_dir_all(mgr.venv_dir()).unwrap();
        assert!(mgr.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_venv_python_is_under_bin() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp);
        assert_eq!(mgr.venv_python(), temp.path().join(".venv/bin/python"));
    }

    #[test]
    fn test_activation_env_sets_virtual_env() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp);
        let env = mgr.activation_env();

        let virtual_env = env.iter().find(|(k, _)| k == "VIRTUAL_ENV").unwrap();
        assert_eq!(virtual_env.1, mgr.venv_dir().to_string_lossy());
    }

    #[test]
    fn test_activation_env_prepends_scripts_dir_to_path() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp);
        let env = mgr.activation_env();

        let path = env.iter().find(|(k, _)| k == "PATH").unwrap();
        assert!(path.1.starts_with(&*mgr.scripts_dir().to_string_lossy()));
    }

    #[test]
    fn test_create_with_missing_interpreter_fails() {
        let temp = TempDir::new().unwrap();
        let mgr = VenvManager::new(
            temp.path().join(".venv"),
            temp.path().join("no-such-python"),
            0,
        );

        assert!(mgr.create().is_err());
        assert!(!mgr.exists());
    }
}
