//! Resolve link command

use colored::Colorize;
use tracing::debug;

use crate::errors::SmartshortError;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;
use crate::services::Resolution;

/// Resolve like a redirect would: prints the destination and counts a visit
pub fn resolve_link(ctx: &StartupContext, code: &str) -> Result<(), CliError> {
    match ctx.redirect_service.resolve(code)? {
        Resolution::Found { destination, link } => {
            debug!("CLI resolve '{}' now at {} visits", code, link.visits);
            println!(
                "{} {} -> {} {}",
                "→".bold().green(),
                code.cyan(),
                destination.blue().underline(),
                format!("(visits: {})", link.visits).dimmed()
            );
            Ok(())
        }
        Resolution::NotFound => Err(SmartshortError::not_found(format!(
            "Short link does not exist: {}",
            code
        ))
        .into()),
    }
}
