//! CLI interface module
//!
//! This module provides command-line interface functionality for smartshort.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::SmartshortError;
use crate::runtime::lifetime::StartupContext;
use commands::{
    add_link, analyze_url, config_generate, list_links, remove_link, resolve_link, show_link,
    show_stats,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<SmartshortError> for CliError {
    fn from(err: SmartshortError) -> Self {
        match err {
            SmartshortError::Validation(msg) => CliError::ParseError(msg),
            SmartshortError::FileOperation(_) | SmartshortError::Serialization(_) => {
                CliError::StorageError(err.to_string())
            }
            other => CliError::CommandError(other.message().to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// `serve` is not a one-shot command and is started by the runtime instead.
pub async fn run_cli_command(ctx: &StartupContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Add {
            args,
            analyze,
            force,
        } => {
            let (alias, url) = Commands::parse_add_args(&args);
            add_link(ctx, alias, url, analyze, force).await
        }

        Commands::List { json } => list_links(ctx, json),

        Commands::Show { code } => show_link(ctx, &code),

        Commands::Resolve { code } => resolve_link(ctx, &code),

        Commands::Remove { id } => remove_link(ctx, &id),

        Commands::Analyze { url } => analyze_url(ctx, &url).await,

        Commands::Stats => show_stats(ctx),

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        Commands::Serve => Err(CliError::CommandError(
            "`serve` runs the HTTP server and cannot be run as a one-shot command".to_string(),
        )),
    }
}
