// src/handlers/report.rs

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::statistics::{TestStatistics, compute_statistics},
    storage::{DynResultStore, ResultStore},
    utils::csv::{EXPORT_FILENAME, render_csv},
};

/// Aggregate statistics over every stored result.
///
/// Responds with JSON `null` when there are no data rows yet; callers treat
/// that as an empty state, not an error.
pub async fn get_statistics(
    State(store): State<DynResultStore>,
) -> Result<Json<Option<TestStatistics>>, AppError> {
    let records = store.read_all().await?;

    Ok(Json(compute_statistics(&records)))
}

/// Serves the full table as a CSV download.
pub async fn export_csv(
    State(store): State<DynResultStore>,
) -> Result<impl IntoResponse, AppError> {
    let records = store.read_all().await?;
    let body = render_csv(&records);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        body,
    ))
}
