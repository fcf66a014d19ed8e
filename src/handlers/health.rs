use actix_web::{HttpResponse, web};
use serde::Serialize;

use super::AppState;

/// Health check response showing service status and store size.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub tasks: usize,
}

/// Liveness probe. The store is in-process memory, so the service is healthy
/// whenever it can answer at all.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        tasks: state.store.len().await,
    })
}
