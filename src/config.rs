use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "budgety",
    version,
    about = "Budgety - single-page income and expense tracker"
)]
pub(crate) struct Cli {
    /// Log filter, e.g. `budgety=debug`
    #[arg(long, env = "BUDGETY_LOG", global = true)]
    pub(crate) log_level: Option<String>,

    /// Write logs to this file instead of the default location
    #[arg(long, env = "BUDGETY_LOG_FILE", global = true)]
    pub(crate) log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub(crate) enum Command {
    /// Launch the interactive budget screen (default)
    Tui,
    /// Run a CSV script of add/delete actions and print every update
    Replay {
        /// Script file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },
    /// Run a CSV script and print only the final budget
    Summary {
        /// Script file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },
}

/// Where a replay script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptSource {
    Stdin,
    File(PathBuf),
}

impl ScriptSource {
    fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    Tui,
    Replay(ScriptSource),
    Summary(ScriptSource),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) mode: Mode,
    pub(crate) log_filter: String,
    log_file: Option<PathBuf>,
}

impl Config {
    pub(crate) fn from_cli(cli: Cli) -> Self {
        let mode = match cli.command {
            None | Some(Command::Tui) => Mode::Tui,
            Some(Command::Replay { file }) => Mode::Replay(ScriptSource::from_arg(file)),
            Some(Command::Summary { file }) => Mode::Summary(ScriptSource::from_arg(file)),
        };

        // Script modes print to stdout; keep stderr quiet unless asked.
        let log_filter = cli.log_level.unwrap_or_else(|| match mode {
            Mode::Tui => "budgety=info".to_string(),
            Mode::Replay(_) | Mode::Summary(_) => "budgety=warn".to_string(),
        });

        Self {
            mode,
            log_filter,
            log_file: cli.log_file,
        }
    }

    /// The TUI owns the terminal, so it always logs to a file.
    pub(crate) fn log_target(&self) -> Result<LogTarget> {
        match (&self.log_file, &self.mode) {
            (Some(path), _) => Ok(LogTarget::File(path.clone())),
            (None, Mode::Tui) => Ok(LogTarget::File(default_log_path()?)),
            (None, _) => Ok(LogTarget::Stderr),
        }
    }
}

fn default_log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgety", "Budgety")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_local_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("budgety.log"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
