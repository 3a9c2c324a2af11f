//! Command-line interface for ocplint
//!
//! Provides commands: check, rules, init

mod check_cmd;
mod init_cmd;
mod rules_cmd;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::error::LintError;

/// ocplint - open-closed principle hints for Kotlin `when` expressions
#[derive(Parser, Debug)]
#[command(name = "ocplint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./ocplint.toml when present)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output diagnostics as JSON, one object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze syntax documents (*.json) produced by the Kotlin front end
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Exit with a failure status when anything is reported
        #[arg(long)]
        strict: bool,
    },

    /// List the available rules and their effective settings
    Rules,

    /// Write an ocplint.toml with every rule's default settings
    Init {
        /// Directory to write the configuration into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Run the CLI
    pub fn run(self) -> Result<ExitCode, LintError> {
        match self.command {
            Command::Check { paths, strict } => {
                let config = load_config(self.config.as_deref())?;
                check_cmd::run_check(&paths, &config, strict, self.json)
            }
            Command::Rules => {
                let config = load_config(self.config.as_deref())?;
                rules_cmd::run_rules(&config);
                Ok(ExitCode::SUCCESS)
            }
            Command::Init { dir, force } => {
                init_cmd::run_init(&dir, force)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config, LintError> {
    let cwd = std::env::current_dir().map_err(|source| LintError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(Config::discover(explicit, &cwd)?)
}

/// Simple recursive directory walker
fn walkdir(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.is_file() {
            results.push(entry_path);
        } else if entry_path.is_dir() {
            results.extend(walkdir(&entry_path)?);
        }
    }
    Ok(results)
}
