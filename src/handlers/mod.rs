//! HTTP handlers for the task store endpoints.
//!
//! This module contains all HTTP handler functions plus the route table, so the
//! same wiring can be used by both the main application and integration tests.

mod health;
mod task;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, middleware, web};

use crate::{config::Config, error::ApiError, store::TaskStore};

// Re-export handlers for route configuration
pub use health::health_check;
pub use task::{add_task, delete_task, get_task, list_task, update_task};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(TaskStore::new()),
            config: Arc::new(config),
        }
    }
}

/// Map a body-decode failure onto a generic 500 with the cause in the server
/// log.
fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Decode(err.to_string()).into()
}

/// A path id that does not parse as a UUID cannot match any task, so it gets
/// the same 404 an unknown id would.
fn path_error_handler(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NotFound(err.to_string()).into()
}

/// Fallback for unmatched paths and methods.
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("Not Found!")
}

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/health", web::get().to(health_check))
            .route("/tasks", web::get().to(list_task))
            .route("/tasks", web::post().to(add_task))
            .route(
                "/tasks",
                web::method(actix_web::http::Method::OPTIONS).to(task::preflight_collection),
            )
            .route("/tasks/{task_id}", web::get().to(get_task))
            .route("/tasks/{task_id}", web::put().to(update_task))
            .route("/tasks/{task_id}", web::delete().to(delete_task))
            .route(
                "/tasks/{task_id}",
                web::method(actix_web::http::Method::OPTIONS).to(task::preflight_item),
            )
            .default_service(web::route().to(not_found)),
    );
}
