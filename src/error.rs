// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
///
/// The wire contract knows only one error shape
/// (`{"result":"error","error":"..."}`), so the kinds here exist for status
/// mapping and logging, not for the client.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error (storage failures)
    Storage(String),

    // 400 Bad Request
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "{}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Every error becomes the two-field JSON body the submitting form expects.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({
            "result": "error",
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::Storage`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
