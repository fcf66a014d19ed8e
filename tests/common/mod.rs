//! Shared helpers for integration tests: app setup, request builders and
//! response assertions.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use task_store::config::Config;
use task_store::handlers::AppState;
use task_store::models::Task;
use uuid::Uuid;

/// Build the full service from a state. A macro because `init_service`
/// returns an unnameable type.
macro_rules! test_service {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(task_store::handlers::configure_routes),
        )
        .await
    };
}

/// Setup a complete test app: empty store plus default config.
pub fn setup_test_app() -> AppState {
    AppState::new(Config::default())
}

/// POST /tasks with the given name, assert 200, return the created task.
pub async fn create_task_ok<S, B>(app: &S, name: &str) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/tasks")
        .set_json(serde_json::json!({ "name": name }))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::OK,
        "POST /tasks should return 200 OK"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /tasks, assert 200, return the full collection.
pub async fn list_tasks_ok<S, B>(app: &S) -> Vec<Task>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get().uri("/tasks").to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /tasks returned {}",
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /tasks/{id}, assert 200, return the task.
pub async fn get_task_ok<S, B>(app: &S, task_id: Uuid) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/tasks/{}", task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /tasks/{} returned {}",
        task_id,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// PUT /tasks/{id} with a new name, assert 200, return the updated task.
pub async fn update_task_ok<S, B>(app: &S, task_id: Uuid, name: &str) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::put()
        .uri(&format!("/tasks/{}", task_id))
        .set_json(serde_json::json!({ "name": name }))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::OK,
        "PUT /tasks/{} should return 200 OK",
        task_id
    );
    actix_web::test::read_body_json(resp).await
}

/// DELETE /tasks/{id}, assert 204.
pub async fn delete_task_ok<S, B>(app: &S, task_id: Uuid)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::delete()
        .uri(&format!("/tasks/{}", task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::NO_CONTENT,
        "DELETE /tasks/{} should return 204",
        task_id
    );
}
