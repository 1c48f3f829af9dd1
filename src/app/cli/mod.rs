//! CLI Adapter.

mod build;
mod changelog;
mod workbench;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::config::CONFIG_FILENAME;
use crate::domain::{AppError, ToolConfig};

#[derive(Parser)]
#[command(name = "omvpack")]
#[command(version)]
#[command(
    about = "Build, scaffold, and draft changelogs for OpenMediaVault plugin packages",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./omvpack.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Debian binary package and move it to an output directory
    #[clap(visible_alias = "b")]
    Build {
        /// Package source directory containing debian/
        source_dir: Option<PathBuf>,
        /// Directory receiving the built .deb
        output_dir: Option<PathBuf>,
        /// Package name (defaults to the source directory name)
        #[arg(long)]
        package_name: Option<String>,
        /// Fail instead of installing debhelper when it is missing
        #[arg(long)]
        no_install: bool,
    },
    /// Draft a debian/changelog entry from GitHub commits and pull requests
    #[clap(visible_alias = "cl")]
    Changelog {
        /// GitHub owner or organization
        #[arg(long)]
        owner: Option<String>,
        /// Repository name
        #[arg(long)]
        repo: Option<String>,
        /// Changelog path (overrides the configured path)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print the new entry without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate workbench YAML from the plugin datamodel
    #[clap(visible_alias = "wb")]
    Workbench {
        /// Plugin name, e.g. `ftp` for openmediavault-ftp
        #[arg(long)]
        plugin: Option<String>,
        /// Datamodel file type, e.g. `services`
        #[arg(long)]
        file_type: Option<String>,
        /// Directory containing openmediavault-<plugin>/
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_cli_config(cli.config).and_then(|config| match cli.command {
        Commands::Build { source_dir, output_dir, package_name, no_install } => {
            build::run_build(&config, source_dir, output_dir, package_name, no_install)
        }
        Commands::Changelog { owner, repo, path, dry_run } => {
            changelog::run_changelog(&config, owner, repo, path, dry_run)
        }
        Commands::Workbench { plugin, file_type, root } => {
            workbench::run_workbench(plugin, file_type, root)
        }
    });

    if let Err(e) = result {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_cli_config(path: Option<PathBuf>) -> Result<ToolConfig, AppError> {
    match path {
        Some(path) => crate::app::api::load_config(&path, true),
        None => crate::app::api::load_config(&PathBuf::from(CONFIG_FILENAME), false),
    }
}

/// Use `value` when given, otherwise ask for it on the terminal.
fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value);
    }

    let answer = match Input::<String>::new().with_prompt(prompt).interact_text() {
        Ok(answer) => answer,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            return Err(AppError::config_error(format!("{} is required", prompt)));
        }
        Err(err) => {
            return Err(AppError::config_error(format!("Failed to read {}: {}", prompt, err)));
        }
    };

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", prompt)));
    }
    Ok(answer)
}

fn path_or_prompt(value: Option<PathBuf>, prompt: &str) -> Result<PathBuf, AppError> {
    match value {
        Some(path) => Ok(path),
        None => value_or_prompt(None, prompt).map(PathBuf::from),
    }
}
