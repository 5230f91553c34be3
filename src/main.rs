use std::process;

use clap::Parser;
use tracing::error;

use smartshort::cli::{Cli, Commands};
use smartshort::config::{LoggingConfig, StaticConfig, get_config, init_config, init_config_with};
use smartshort::runtime::lifetime::prepare_startup;
use smartshort::runtime::modes::{run_cli, run_server};
use smartshort::system::init_logging;

/// One-shot commands print their own output; keep stderr quiet unless logging to a file
fn cli_logging(config: &LoggingConfig) -> LoggingConfig {
    let mut config = config.clone();
    if config.file.as_deref().is_none_or(str::is_empty) {
        config.level = "warn".to_string();
    }
    config
}

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config_file.as_deref() {
        Some(path) => init_config_with(StaticConfig::load_from(path)),
        None => init_config(),
    }
    let config = get_config();

    let is_server = matches!(cli.command, Commands::Serve);
    let logging = if is_server {
        config.logging.clone()
    } else {
        cli_logging(&config.logging)
    };

    // guard 必须存活到进程结束
    let guard = match init_logging(&logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    };

    let ctx = match prepare_startup(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            eprintln!("Startup failed: {:#}", e);
            drop(guard);
            process::exit(1);
        }
    };

    let failed = match cli.command {
        Commands::Serve => match run_server(ctx).await {
            Ok(()) => false,
            Err(e) => {
                error!("Server error: {:#}", e);
                eprintln!("Server error: {:#}", e);
                true
            }
        },
        cmd => match run_cli(&ctx, cmd).await {
            Ok(()) => false,
            Err(e) => {
                eprintln!("{}", e.format_colored());
                true
            }
        },
    };

    drop(guard);
    if failed {
        process::exit(1);
    }
}
