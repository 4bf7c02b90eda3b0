use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::RowProcessor;
use crate::application::services::{JobServiceError, JobStart};
use crate::domain::{Document, JobId, JobView, MSG_COMPLETE};
use crate::presentation::state::AppState;

use super::envelope::{job_response, service_error_response};
use super::owner::Owner;

#[derive(Serialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub job: JobView,
}

/// An unparseable id cannot belong to the caller; report it exactly
/// like an unknown one.
fn parse_job_id(raw: &str) -> Result<JobId, JobServiceError> {
    Uuid::parse_str(raw)
        .map(JobId::from_uuid)
        .map_err(|_| JobServiceError::JobNotFound)
}

#[tracing::instrument(skip(state), fields(owner = %owner.0))]
pub async fn start_job_handler<D, P>(
    State(state): State<AppState<D, P>>,
    owner: Owner,
    Path(job_id): Path<String>,
) -> Response
where
    D: Document,
    P: RowProcessor<D> + 'static,
{
    let result = parse_job_id(&job_id).and_then(|id| state.job_service.start_job(&owner.0, id));
    match result {
        Ok((view, JobStart::Started)) => job_response("작업을 시작했습니다.", view),
        Ok((view, JobStart::AlreadyRunning)) => job_response("이미 작업이 진행 중입니다.", view),
        Ok((view, JobStart::AlreadyComplete)) => job_response(MSG_COMPLETE, view),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner = %owner.0))]
pub async fn stop_job_handler<D, P>(
    State(state): State<AppState<D, P>>,
    owner: Owner,
    Path(job_id): Path<String>,
) -> Response
where
    D: Document,
    P: RowProcessor<D> + 'static,
{
    let result = parse_job_id(&job_id).and_then(|id| state.job_service.stop_job(&owner.0, id));
    match result {
        Ok((view, true)) => job_response("중지 요청을 보냈습니다.", view),
        Ok((view, false)) => job_response("이미 중지 상태입니다.", view),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner = %owner.0))]
pub async fn job_status_handler<D, P>(
    State(state): State<AppState<D, P>>,
    owner: Owner,
    Path(job_id): Path<String>,
) -> Response
where
    D: Document,
    P: RowProcessor<D> + 'static,
{
    let result = parse_job_id(&job_id).and_then(|id| state.job_service.status_job(&owner.0, id));
    match result {
        Ok(job) => (StatusCode::OK, Json(StatusResponse { ok: true, job })).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner = %owner.0))]
pub async fn download_job_handler<D, P>(
    State(state): State<AppState<D, P>>,
    owner: Owner,
    Path(job_id): Path<String>,
) -> Response
where
    D: Document,
    P: RowProcessor<D> + 'static,
{
    let id = match parse_job_id(&job_id) {
        Ok(id) => id,
        Err(e) => return service_error_response(e),
    };
    match state.job_service.download_job(&owner.0, id).await {
        Ok(download) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, download.mime_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", download.filename),
                ),
            ],
            download.bytes,
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
