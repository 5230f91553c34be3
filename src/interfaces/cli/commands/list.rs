//! List links command

use colored::Colorize;

use super::helpers::format_tags;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

pub fn list_links(ctx: &StartupContext, json: bool) -> Result<(), CliError> {
    let links = ctx.link_service.list_links();

    if json {
        let output = serde_json::to_string_pretty(&links)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize links: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for link in &links {
        let mut info_parts = vec![
            format!("[{}]", link.id).dimmed().to_string(),
            format!(
                "{} -> {}",
                link.short_code.cyan(),
                link.original_url.blue().underline()
            ),
        ];

        if let Some(title) = &link.title {
            info_parts.push(format!("\"{}\"", title));
        }

        if let Some(tags) = link.tags.as_ref().filter(|t| !t.is_empty()) {
            info_parts.push(format_tags(tags));
        }

        if link.visits > 0 {
            info_parts.push(
                format!("(visits: {})", link.visits)
                    .dimmed()
                    .cyan()
                    .to_string(),
            );
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
