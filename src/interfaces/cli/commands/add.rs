//! Add link command

use colored::Colorize;

use super::helpers::{print_analysis, print_fallback_notice, print_link_details};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;
use crate::services::CreateLinkRequest;

pub async fn add_link(
    ctx: &StartupContext,
    alias: Option<String>,
    url: String,
    analyze: bool,
    force: bool,
) -> Result<(), CliError> {
    let result = if analyze {
        println!(
            "{} Analyzing {} with {}...",
            "ℹ".bold().blue(),
            url.blue().underline(),
            ctx.analyzer.provider_name()
        );
        let (result, report) = ctx
            .link_service
            .create_link_with_analysis(&url, alias, force, &ctx.analyzer)
            .await?;

        if report.is_fallback() {
            print_fallback_notice(&report);
        } else {
            print_analysis(report.result());
        }
        result
    } else {
        ctx.link_service.create_link(CreateLinkRequest {
            url,
            alias,
            metadata: None,
            force,
        })?
    };

    if result.generated_code {
        println!(
            "{} Generated random code: {}",
            "ℹ".bold().blue(),
            result.link.short_code.magenta()
        );
    }
    if result.shadows_existing {
        println!(
            "{} Code {} was already in use; the new link now takes precedence",
            "⚠".bold().yellow(),
            result.link.short_code.cyan()
        );
    }

    println!(
        "{} Added short link: {} -> {}",
        "✓".bold().green(),
        result.link.short_code.cyan(),
        result.link.original_url.blue().underline()
    );
    print_link_details(
        &result.link,
        &ctx.config.features.short_url(&result.link.short_code),
    );

    Ok(())
}
