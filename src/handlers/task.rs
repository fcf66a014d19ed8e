use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::{
    dtos,
    error::{ApiError, ApiResult},
};

use super::AppState;

/// List all tasks in insertion order. Empty array when the store is empty.
pub async fn list_task(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let tasks = state.store.list().await;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Create a new task from the JSON body and return it with its generated id.
pub async fn add_task(
    state: web::Data<AppState>,
    form: web::Json<dtos::NewTaskDto>,
) -> ApiResult<HttpResponse> {
    let task = state.store.create(form.0.name).await;
    log::info!("created task {} ({:?})", task.id, task.name);
    Ok(HttpResponse::Ok().json(task))
}

/// Find a task by its path id.
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    match state.store.get(*task_id).await {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(ApiError::NotFound(task_id.to_string())),
    }
}

/// Replace the name of the task with the given path id. The id is immutable.
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
    form: web::Json<dtos::UpdateTaskDto>,
) -> ApiResult<HttpResponse> {
    match state.store.rename(*task_id, form.0.name).await {
        Some(task) => {
            log::info!("renamed task {} to {:?}", task.id, task.name);
            Ok(HttpResponse::Ok().json(task))
        }
        None => Err(ApiError::NotFound(task_id.to_string())),
    }
}

/// Remove the task with the given path id. Idempotent: deleting an id that no
/// longer (or never) existed is still 204.
pub async fn delete_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let removed = state.store.remove(*task_id).await;
    log::debug!("delete task {}: removed={removed}", *task_id);
    Ok(HttpResponse::NoContent().finish())
}

/// CORS preflight for the collection resource.
pub async fn preflight_collection() -> HttpResponse {
    preflight("GET, POST, OPTIONS")
}

/// CORS preflight for the single-item resource.
pub async fn preflight_item() -> HttpResponse {
    preflight("GET, PUT, DELETE, OPTIONS")
}

fn preflight(methods: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Methods", methods))
        .finish()
}
