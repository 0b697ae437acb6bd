//! Service-level endpoints.

use actix_web::HttpResponse;
use blog_shared::MessageResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Welcome to the Blog Service API"))
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
