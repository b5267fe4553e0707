//! Netwatch CLI entry point.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use netwatch::commands::{check, clean, exec, hosts, info, init, run, setup};
use netwatch::config::{Config, DEFAULT_HOSTS_FILE, DEFAULT_VENV_DIR};
use netwatch::error::{NetwatchError, Result};
use netwatch::monitor::dashboard::Thresholds;
use netwatch::python::find_python;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netwatch")]
#[command(about = "Host reachability monitor with a live terminal dashboard")]
#[command(version)]
#[command(author)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the Python interpreter (overrides auto-detection)
    #[arg(long, global = true, env = "NETWATCH_PYTHON")]
    python: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Monitor hosts with a live dashboard
    Run {
        /// Hosts file to monitor
        #[arg(long)]
        hosts: Option<PathBuf>,

        /// Seconds between probes of the same host
        #[arg(short, long)]
        interval: Option<u64>,

        /// Number of probes kept in the sliding stats window
        #[arg(long)]
        history: Option<usize>,

        /// Per-probe timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Do not watch the hosts file for changes
        #[arg(long)]
        no_watch: bool,
    },

    /// Probe every host once and report
    Check {
        /// Hosts file to probe
        #[arg(long)]
        hosts: Option<PathBuf>,

        /// Per-probe timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exit nonzero when any host is unavailable
        #[arg(long)]
        strict: bool,
    },

    /// Parse the hosts file and list the expanded targets
    Hosts {
        /// Hosts file to parse
        #[arg(long)]
        hosts: Option<PathBuf>,
    },

    /// Scaffold a workspace (hosts file + config)
    Init {
        /// Directory to create the workspace in (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Provision the scripting venv and upgrade pip
    Setup {
        /// Workspace directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Venv directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Requirements file to install after the upgrade step
        #[arg(short, long)]
        requirements: Option<PathBuf>,
    },

    /// Run a command inside the activated venv
    Exec {
        /// Venv directory
        #[arg(long)]
        venv: Option<PathBuf>,

        /// Command and arguments to run
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Show workspace and environment status
    Info {
        /// Workspace directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Remove the venv and bytecode caches
    Clean {
        /// Workspace directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Show what would be deleted without actually deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for check::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => check::OutputFormat::Text,
            OutputFormat::Json => check::OutputFormat::Json,
        }
    }
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbose;

    // Load optional config
    let config = Config::load_from_cwd()?.unwrap_or_default();

    let hosts_file = |cli_hosts: Option<PathBuf>| -> PathBuf {
        cli_hosts
            .or_else(|| config.hosts_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HOSTS_FILE))
    };

    let venv_dir = |cli_venv: Option<PathBuf>| -> PathBuf {
        cli_venv
            .or_else(|| config.venv_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VENV_DIR))
    };

    // Determine Python path (CLI > config > auto-detect)
    let python_path = || -> Result<PathBuf> {
        let path = if let Some(ref path) = cli.python {
            path.clone()
        } else if let Some(ref path) = config.python_path {
            path.clone()
        } else {
            return find_python().ok_or(NetwatchError::PythonNotFound);
        };

        // Validate the specified path exists
        if !path.exists() {
            return Err(NetwatchError::CommandFailed(format!(
                "Python not found at specified path: {}",
                path.display()
            )));
        }

        Ok(path)
    };

    let thresholds = Thresholds {
        low_ms: config.low_latency_ms.unwrap_or(50.0),
        high_ms: config.high_latency_ms.unwrap_or(150.0),
    };

    match cli.command {
        Command::Run {
            hosts,
            interval,
            history,
            timeout,
            no_watch,
        } => run::execute(run::RunArgs {
            hosts_file: hosts_file(hosts),
            interval_secs: interval.or(config.interval_secs).unwrap_or(1),
            history_size: history.or(config.history_size).unwrap_or(10),
            timeout_secs: timeout.or(config.timeout_secs).unwrap_or(2),
            no_watch,
            thresholds,
            verbosity,
        }),

        Command::Check {
            hosts,
            timeout,
            format,
            strict,
        } => check::execute(check::CheckArgs {
            hosts_file: hosts_file(hosts),
            timeout_secs: timeout.or(config.timeout_secs).unwrap_or(2),
            format: format.into(),
            strict,
            verbosity,
        }),

        Command::Hosts { hosts } => hosts::execute(hosts::HostsArgs {
            hosts_file: hosts_file(hosts),
        }),

        Command::Init { path, force } => init::execute(init::InitArgs { path, force }),

        Command::Setup {
            path,
            output,
            requirements,
        } => setup::execute(setup::SetupArgs {
            path,
            venv: venv_dir(output),
            requirements,
            python: python_path()?,
            verbosity,
        }),

        Command::Exec { venv, command } => exec::execute(exec::ExecArgs {
            path: PathBuf::from("."),
            venv: venv_dir(venv),
            command,
            verbosity,
        }),

        Command::Info { path } => info::execute(info::InfoArgs {
            path,
            hosts_file: hosts_file(None),
            venv: venv_dir(None),
            python: cli.python.clone().or_else(|| config.python_path.clone()),
            verbosity,
        }),

        Command::Clean { path, dry_run } => clean::execute(clean::CleanArgs {
            path,
            venv: venv_dir(None),
            dry_run,
        }),

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "netwatch", &mut io::stdout());
            Ok(())
        }
    }
}
