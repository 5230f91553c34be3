//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for smartshort using clap's derive macros.

use clap::{Parser, Subcommand};

/// SmartShort - A local-first URL shortener with link analysis
#[derive(Parser)]
#[command(name = "smartshort")]
#[command(version)]
#[command(about = "A local-first URL shortener with link analysis", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long = "config", short = 'c', global = true, value_name = "FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a short link
    ///
    /// Usage: add [ALIAS] <URL>
    /// - If only URL provided, generates random short code
    /// - If both provided, uses the sanitized alias
    Add {
        /// Positional args: [alias] <url>
        #[arg(required = true, num_args = 1..=2)]
        args: Vec<String>,

        /// Ask the analysis service for title, summary, tags and an alias
        #[arg(long, short = 'a')]
        analyze: bool,

        /// Add even if the alias is already in use
        #[arg(long)]
        force: bool,
    },

    /// List all short links, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one link without counting a visit
    Show {
        /// Short code
        code: String,
    },

    /// Resolve a short code, counting a visit
    Resolve {
        /// Short code
        code: String,
    },

    /// Remove a short link by record id
    Remove {
        /// Record id (see `list`)
        id: String,
    },

    /// Analyze a URL without creating a link
    Analyze {
        url: String,
    },

    /// Show collection statistics
    Stats,

    /// Start the redirect HTTP server
    Serve,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Parse add command args into (alias, url)
    pub fn parse_add_args(args: &[String]) -> (Option<String>, String) {
        match args {
            [alias, url, ..] => (Some(alias.clone()), url.clone()),
            [url] => (None, url.clone()),
            [] => (None, String::new()),
        }
    }
}
