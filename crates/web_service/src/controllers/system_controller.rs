use actix_web::{get, web, HttpResponse, Responder};

use crate::dto::HealthResponse;

const SERVICE_NAME: &str = "AI Blog Generator";

/// Liveness probe. Never touches the upstream API.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Main page with the blog generator form.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(index);
}
