use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients. The analysis core is total, so the only
/// failures that reach a client originate in this layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        };
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
