use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::JobServiceError;
use crate::domain::JobView;

/// Standard success envelope carrying a job snapshot.
#[derive(Serialize)]
pub struct JobEnvelope {
    pub ok: bool,
    pub message: String,
    pub job: JobView,
}

/// Plain `{ok, message}` body, used for every failure response.
#[derive(Serialize)]
pub struct ApiMessage {
    pub ok: bool,
    pub message: String,
}

pub fn job_response(message: impl Into<String>, job: JobView) -> Response {
    (
        StatusCode::OK,
        Json(JobEnvelope {
            ok: true,
            message: message.into(),
            job,
        }),
    )
        .into_response()
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiMessage {
            ok: false,
            message: message.into(),
        }),
    )
        .into_response()
}

/// Map an engine error to a status code and the Korean message shown
/// in the UI.
pub fn service_error_response(err: JobServiceError) -> Response {
    match err {
        JobServiceError::JobAlreadyActive => error_response(
            StatusCode::CONFLICT,
            "진행 중인 작업이 있습니다. 먼저 중지하거나 완료하세요.",
        ),
        JobServiceError::JobNotFound => {
            error_response(StatusCode::NOT_FOUND, "작업을 찾을 수 없습니다.")
        }
        JobServiceError::NoTargetRows => {
            error_response(StatusCode::BAD_REQUEST, "A열에 정제할 주소가 없습니다.")
        }
        JobServiceError::JobErrored(detail) => error_response(
            StatusCode::BAD_REQUEST,
            format!("오류 상태입니다: {}", detail),
        ),
        JobServiceError::NothingToDownload => {
            error_response(StatusCode::BAD_REQUEST, "다운로드할 변환 결과가 없습니다.")
        }
        JobServiceError::Document(e) => {
            tracing::error!(error = %e, "Document export failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "파일을 내보내지 못했습니다.",
            )
        }
    }
}
