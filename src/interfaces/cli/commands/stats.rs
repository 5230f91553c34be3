//! Statistics command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

pub fn show_stats(ctx: &StartupContext) -> Result<(), CliError> {
    let stats = ctx.link_service.stats();

    println!("{}", "Link statistics:".bold().green());
    println!(
        "  {} {}",
        "Links:".bold(),
        stats.total_links.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Total visits:".bold(),
        stats.total_visits.to_string().cyan()
    );
    println!(
        "  {} {}",
        "Visited links:".bold(),
        stats.visited_links.to_string().cyan()
    );

    if let Some(top) = stats.most_visited {
        println!(
            "  {} {} -> {} {}",
            "Most visited:".bold(),
            top.short_code.cyan(),
            top.original_url.blue().underline(),
            format!("({} visits)", top.visits).dimmed()
        );
    }

    println!(
        "  {} {} ({})",
        "Backend:".bold(),
        ctx.store.backend_name(),
        ctx.store.slot_name().dimmed()
    );
    Ok(())
}
