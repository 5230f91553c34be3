//! Mode routing
//!
//! `serve` starts the HTTP server, every other subcommand runs once and exits.

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
