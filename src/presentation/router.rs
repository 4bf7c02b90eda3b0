use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::RowProcessor;
use crate::infrastructure::observability::request_id_middleware;
use crate::infrastructure::spreadsheet::CsvDocument;
use crate::presentation::handlers::{
    download_job_handler, health_handler, job_status_handler, start_job_handler, stop_job_handler,
    upload_handler,
};
use crate::presentation::state::AppState;

/// The HTTP surface over the job engine. Uploads speak CSV; everything
/// below the handlers is generic over the document type.
pub fn create_router<P>(state: AppState<CsvDocument, P>) -> Router
where
    P: RowProcessor<CsvDocument> + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/upload", post(upload_handler::<P>))
        .route(
            "/api/jobs/{job_id}/start",
            post(start_job_handler::<CsvDocument, P>),
        )
        .route(
            "/api/jobs/{job_id}/stop",
            post(stop_job_handler::<CsvDocument, P>),
        )
        .route(
            "/api/jobs/{job_id}/status",
            get(job_status_handler::<CsvDocument, P>),
        )
        .route(
            "/api/jobs/{job_id}/download",
            get(download_job_handler::<CsvDocument, P>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
