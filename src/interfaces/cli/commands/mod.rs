//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod add;
mod analyze;
mod config_gen;
mod helpers;
mod list;
mod remove;
mod resolve;
mod show;
mod stats;

pub use add::add_link;
pub use analyze::analyze_url;
pub use config_gen::config_generate;
pub use list::list_links;
pub use remove::remove_link;
pub use resolve::resolve_link;
pub use show::show_link;
pub use stats::show_stats;
