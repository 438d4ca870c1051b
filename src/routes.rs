// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{report, submission},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Root carries the submission contract: POST appends a result, GET is the
///   plaintext liveness probe.
/// * Read-side helpers (statistics, CSV export) live under /api.
/// * Applies global middleware (Trace, CORS) and injects the store handle.
pub fn create_router(state: AppState) -> Router {
    // The quiz page posts cross-origin from a static host, so CORS is open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let report_routes = Router::new()
        .route("/statistics", get(report::get_statistics))
        .route("/export", get(report::export_csv));

    Router::new()
        .route(
            "/",
            get(submission::liveness).post(submission::receive_result),
        )
        .nest("/api", report_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
