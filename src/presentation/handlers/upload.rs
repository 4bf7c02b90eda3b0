use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::ports::RowProcessor;
use crate::domain::{collect_target_rows, FIRST_DATA_ROW};
use crate::infrastructure::spreadsheet::CsvDocument;
use crate::presentation::state::AppState;

use super::envelope::{error_response, job_response, service_error_response};
use super::owner::Owner;

/// Accept a CSV of addresses and admit a new refinement job for the
/// caller. The job starts in `Uploaded`; a separate start call kicks
/// off the worker.
#[tracing::instrument(skip(state, multipart), fields(owner = %owner.0))]
pub async fn upload_handler<P>(
    State(state): State<AppState<CsvDocument, P>>,
    owner: Owner,
    mut multipart: Multipart,
) -> Response
where
    P: RowProcessor<CsvDocument> + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return error_response(StatusCode::BAD_REQUEST, "업로드할 파일을 선택하세요.");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart body");
            return error_response(StatusCode::BAD_REQUEST, "업로드할 파일을 선택하세요.");
        }
    };

    let filename = field.file_name().unwrap_or_default().trim().to_string();
    if filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "업로드할 파일을 선택하세요.");
    }
    if !filename.to_lowercase().ends_with(".csv") {
        return error_response(StatusCode::BAD_REQUEST, "csv 파일만 업로드할 수 있습니다.");
    }

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read uploaded bytes");
            return error_response(StatusCode::BAD_REQUEST, "업로드할 파일을 선택하세요.");
        }
    };
    tracing::debug!(filename = %filename, bytes = data.len(), "File received");

    let document = match CsvDocument::parse(&data) {
        Ok(document) => document,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("CSV 파일을 읽지 못했습니다: {}", e),
            );
        }
    };

    let targets = collect_target_rows(&document, FIRST_DATA_ROW);
    match state
        .job_service
        .create_job(&owner.0, filename, targets, document)
    {
        Ok(view) => {
            let message = view.message.clone();
            job_response(message, view)
        }
        Err(e) => service_error_response(e),
    }
}
