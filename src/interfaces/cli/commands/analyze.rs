//! Analyze URL command

use colored::Colorize;

use super::helpers::{print_analysis, print_fallback_notice};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;
use crate::utils::validate_url;

/// Print what the analyzer makes of `url`; nothing is stored
pub async fn analyze_url(ctx: &StartupContext, url: &str) -> Result<(), CliError> {
    let url = url.trim();
    validate_url(url).map_err(|e| CliError::ParseError(e.to_string()))?;

    println!(
        "{} Analyzing {} with {}...",
        "ℹ".bold().blue(),
        url.blue().underline(),
        ctx.analyzer.provider_name()
    );

    let report = ctx.analyzer.analyze(url).await;
    print_fallback_notice(&report);
    print_analysis(report.result());
    Ok(())
}
