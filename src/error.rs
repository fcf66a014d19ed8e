//! Error types for the task store service.
//!
//! `ApiError` is the single error type handlers return; its `ResponseError`
//! impl maps each variant onto the HTTP surface. Causes are logged server-side,
//! clients only ever see a generic message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    /// No task with the requested id.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// The request body could not be decoded into the expected structure.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Unexpected failure (e.g. serialization).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Decode(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // error responses bypass the scope middleware, so the CORS header has
        // to be set here as well
        let mut builder = HttpResponse::build(status);
        builder.insert_header(("Access-Control-Allow-Origin", "*"));
        match self {
            ApiError::NotFound(_) => builder.json(serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16()
            })),
            // Decode and serialization failures surface as a generic 500 with
            // the cause only in the server log.
            ApiError::Decode(_) | ApiError::Internal(_) => {
                log::error!("{self}");
                builder.body("Sorry! An error occurred")
            }
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
