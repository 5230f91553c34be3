//! Remove link command

use colored::Colorize;

use crate::errors::SmartshortError;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

pub fn remove_link(ctx: &StartupContext, id: &str) -> Result<(), CliError> {
    if !ctx.link_service.delete_link(id)? {
        return Err(SmartshortError::not_found(format!("No short link with id: {}", id)).into());
    }

    println!("{} Deleted short link: {}", "✓".bold().green(), id.cyan());
    Ok(())
}
