// src/handlers/submission.rs

use axum::{Form, Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{
    error::AppError,
    models::submission::SubmissionRequest,
    storage::{DynResultStore, ResultStore},
};

/// Receives one quiz result and appends it to the store.
///
/// * Builds the record from the form body, applying the field defaults.
/// * Appends exactly one row; the returned index is 1-based and counts the
///   header as row 1, so it increases monotonically from 2.
/// * Any failure surfaces as the single `{"result":"error",...}` channel via
///   `AppError`; there are no retries and no partial-write rollback.
pub async fn receive_result(
    State(store): State<DynResultStore>,
    Form(form): Form<SubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = form.into_record(Utc::now());

    let row = store.append(&record).await.map_err(|e| {
        tracing::error!("Failed to append test result: {:?}", e);
        e
    })?;

    tracing::info!("Stored test result for '{}' at row {}", record.full_name, row);

    Ok(Json(serde_json::json!({
        "result": "success",
        "row": row,
    })))
}

/// Plaintext liveness probe; confirms the endpoint is reachable.
pub async fn liveness() -> &'static str {
    "CodeFounders Test Results API is running"
}
