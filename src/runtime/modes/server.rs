//! Server mode
//!
//! Serves the redirect endpoint over the shared link store.

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::services::{RedirectSettings, health_routes, redirect_routes};
use crate::errors::SmartshortError;
use crate::runtime::lifetime::StartupContext;

pub async fn run_server(ctx: StartupContext) -> Result<()> {
    let bind_address = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);
    let settings = RedirectSettings {
        default_url: ctx.config.features.default_url.clone(),
    };

    let store = ctx.store.clone();
    let redirect_service = ctx.redirect_service.clone();

    info!(
        "Short links resolve under {}",
        ctx.config.features.base_url
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(redirect_service.clone()))
            .app_data(web::Data::new(settings.clone()))
            .service(health_routes())
            .service(redirect_routes())
    })
    .bind(&bind_address)
    .map_err(|e| SmartshortError::server(format!("Failed to bind {}: {}", bind_address, e)))?;

    warn!("Starting server at http://{}", bind_address);
    server.run().await.context("HTTP server exited with an error")?;

    info!("Server stopped");
    Ok(())
}
