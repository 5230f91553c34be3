//! Show link command

use colored::Colorize;

use super::helpers::print_link_details;
use crate::errors::SmartshortError;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

/// Look a link up without counting a visit
pub fn show_link(ctx: &StartupContext, code: &str) -> Result<(), CliError> {
    let link = ctx
        .link_service
        .get_link(code)
        .ok_or_else(|| SmartshortError::not_found(format!("Short link does not exist: {}", code)))?;

    println!("{} {}", "Short link".bold().green(), link.short_code.cyan());
    print_link_details(&link, &ctx.config.features.short_url(&link.short_code));
    Ok(())
}
