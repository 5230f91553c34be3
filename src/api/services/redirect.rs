use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{error, trace};

use crate::services::{RedirectService, Resolution};

/// Settings the redirect handlers read per request
#[derive(Clone, Debug)]
pub struct RedirectSettings {
    pub default_url: String,
}

pub struct RedirectHandler;

impl RedirectHandler {
    pub async fn handle_root(settings: web::Data<RedirectSettings>) -> impl Responder {
        HttpResponse::TemporaryRedirect()
            .insert_header(("Location", settings.default_url.as_str()))
            .finish()
    }

    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<RedirectService>>,
    ) -> impl Responder {
        let code = path.into_inner();
        if code.is_empty() {
            return Self::not_found_response();
        }

        // 文件读写是阻塞操作，放到线程池
        let service = service.get_ref().clone();
        let lookup = code.clone();
        match web::block(move || service.resolve(&lookup)).await {
            Ok(Ok(Resolution::Found { destination, .. })) => {
                trace!("Redirecting '{}' -> {}", code, destination);
                HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                    .insert_header(("Location", destination))
                    .finish()
            }
            Ok(Ok(Resolution::NotFound)) => Self::not_found_response(),
            Ok(Err(e)) => {
                error!("Storage error during redirect of '{}': {}", code, e);
                Self::error_response()
            }
            Err(e) => {
                error!("Redirect worker failed for '{}': {}", code, e);
                Self::error_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body("Link Not Found")
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body("Internal Server Error")
    }
}

/// Redirect routes
///
/// `HEAD /r/{code}` resolves exactly like `GET`, so it also counts a visit.
/// Visits measure resolution attempts; link-preview crawlers that probe with
/// `HEAD` are included in the count.
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(RedirectHandler::handle_root))
        .route("/r/{code}", web::get().to(RedirectHandler::handle_redirect))
        .route("/r/{code}", web::head().to(RedirectHandler::handle_redirect))
}
