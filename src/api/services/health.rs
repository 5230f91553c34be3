use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::trace;

use crate::storage::LinkStore;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub links: usize,
    pub backend: &'static str,
}

/// Reads the store directly; no service logic involved
pub struct HealthService;

impl HealthService {
    pub async fn health_check(store: web::Data<Arc<LinkStore>>) -> impl Responder {
        trace!("Received health check request");

        let store = store.get_ref().clone();
        match web::block(move || (store.len(), store.backend_name())).await {
            Ok((links, backend)) => HttpResponse::Ok().json(HealthResponse {
                status: "healthy",
                links,
                backend,
            }),
            Err(_) => HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy",
                links: 0,
                backend: "unknown",
            }),
        }
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
}
