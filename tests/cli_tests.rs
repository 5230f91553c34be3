//! CLI command tests
//!
//! Runs parsed commands against an in-memory context and checks the store.

use std::sync::Arc;

use clap::Parser;
use smartshort::cli::{Cli, Commands};
use smartshort::config::StaticConfig;
use smartshort::interfaces::cli::{CliError, run_cli_command};
use smartshort::runtime::lifetime::StartupContext;
use smartshort::services::Analyzer;
use smartshort::storage::{LinkStore, MemorySlot};

// =============================================================================
// Test Setup
// =============================================================================

fn context() -> StartupContext {
    let store = Arc::new(LinkStore::new(Box::new(MemorySlot::new("smartshort_links"))));
    StartupContext::with_store(Arc::new(StaticConfig::default()), store, Analyzer::disabled())
}

fn parse(args: &[&str]) -> Commands {
    let mut argv = vec!["smartshort"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

async fn run(ctx: &StartupContext, args: &[&str]) -> Result<(), CliError> {
    run_cli_command(ctx, parse(args)).await
}

// =============================================================================
// Commands
// =============================================================================

#[tokio::test]
async fn test_add_show_resolve_remove() {
    let ctx = context();

    run(&ctx, &["add", "docs", "https://example.com/docs"])
        .await
        .unwrap();
    let link = ctx.store.find_by_code("docs").unwrap();
    assert_eq!(link.original_url, "https://example.com/docs");

    // show 不计访问
    run(&ctx, &["show", "docs"]).await.unwrap();
    assert_eq!(ctx.store.find_by_code("docs").unwrap().visits, 0);

    run(&ctx, &["resolve", "docs"]).await.unwrap();
    assert_eq!(ctx.store.find_by_code("docs").unwrap().visits, 1);

    run(&ctx, &["remove", link.id.as_str()]).await.unwrap();
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_add_with_analysis_disabled_still_creates() {
    let ctx = context();
    run(&ctx, &["add", "--analyze", "https://example.com"])
        .await
        .unwrap();

    let links = ctx.store.list();
    assert_eq!(links.len(), 1);
    assert!(!links[0].has_metadata());
}

#[tokio::test]
async fn test_add_invalid_url_is_parse_error() {
    let ctx = context();
    let err = run(&ctx, &["add", "not-a-url"]).await.unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_duplicate_alias_needs_force() {
    let ctx = context();
    run(&ctx, &["add", "dup", "https://example.com/1"])
        .await
        .unwrap();

    let err = run(&ctx, &["add", "dup", "https://example.com/2"])
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));

    run(&ctx, &["add", "dup", "https://example.com/2", "--force"])
        .await
        .unwrap();
    assert_eq!(ctx.store.len(), 2);
}

#[tokio::test]
async fn test_misses_are_errors() {
    let ctx = context();
    for args in [
        &["show", "nope"][..],
        &["resolve", "nope"][..],
        &["remove", "nope"][..],
    ] {
        let err = run(&ctx, args).await.unwrap_err();
        assert!(
            err.format_simple().contains("nope"),
            "unexpected error for {:?}: {}",
            args,
            err
        );
    }
}

#[tokio::test]
async fn test_list_stats_and_analyze_succeed() {
    let ctx = context();
    run(&ctx, &["list"]).await.unwrap();
    run(&ctx, &["add", "https://example.com"]).await.unwrap();
    run(&ctx, &["list", "--json"]).await.unwrap();
    run(&ctx, &["stats"]).await.unwrap();
    run(&ctx, &["analyze", "https://example.com"]).await.unwrap();

    let err = run(&ctx, &["analyze", "nope"]).await.unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
}

#[tokio::test]
async fn test_serve_is_not_a_one_shot_command() {
    let ctx = context();
    assert!(run(&ctx, &["serve"]).await.is_err());
}
