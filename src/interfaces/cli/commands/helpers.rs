//! Shared output helpers for link commands

use colored::{ColoredString, Colorize};

use crate::services::{AnalysisReport, AnalysisResult};
use crate::storage::ShortLink;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Safety score colored by band: green ≥ 80, yellow ≥ 50, red below
pub(super) fn colored_safety(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        80.. => text.green(),
        50..=79 => text.yellow(),
        _ => text.red(),
    }
}

/// Multi-line detail block for `show`, `add` and `resolve`
pub(super) fn print_link_details(link: &ShortLink, short_url: &str) {
    println!("  {} {}", "Short URL:".bold(), short_url.cyan());
    println!(
        "  {} {}",
        "Target:".bold(),
        link.original_url.blue().underline()
    );
    println!("  {} {}", "ID:".bold(), link.id.dimmed());

    if let Some(created) = link.created_datetime() {
        println!(
            "  {} {}",
            "Created:".bold(),
            created.format(TIME_FORMAT).to_string().yellow()
        );
    }

    println!("  {} {}", "Visits:".bold(), link.visits.to_string().green());
    if let Some(last) = link.last_visited_datetime() {
        println!(
            "  {} {}",
            "Last visit:".bold(),
            last.format(TIME_FORMAT).to_string().yellow()
        );
    }

    if let Some(title) = &link.title {
        println!("  {} {}", "Title:".bold(), title);
    }
    if let Some(summary) = &link.summary {
        println!("  {} {}", "Summary:".bold(), summary.dimmed());
    }
    if let Some(tags) = link.tags.as_ref().filter(|t| !t.is_empty()) {
        println!("  {} {}", "Tags:".bold(), format_tags(tags));
    }
}

pub(super) fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn print_analysis(result: &AnalysisResult) {
    println!("  {} {}", "Title:".bold(), result.title);
    println!("  {} {}", "Summary:".bold(), result.summary.dimmed());
    println!("  {} {}", "Tags:".bold(), format_tags(&result.tags));
    println!(
        "  {} {}",
        "Suggested alias:".bold(),
        result.suggested_alias.magenta()
    );
    println!(
        "  {} {}",
        "Safety score:".bold(),
        colored_safety(result.safety_score)
    );
}

/// One-line notice when the analyzer fell back
pub(super) fn print_fallback_notice(report: &AnalysisReport) {
    if let AnalysisReport::Fallback { reason, .. } = report {
        println!(
            "{} Analysis unavailable ({}), continuing without metadata",
            "ℹ".bold().blue(),
            reason.to_string().dimmed()
        );
    }
}
